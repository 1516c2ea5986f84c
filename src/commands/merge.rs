//! Merge command implementation.
//!
//! Uses O(n log n) sort + O(n) single-pass sweep-line merge.

use crate::error::Result;
use crate::interval::Interval;
use crate::output::IntervalWriter;
use crate::config::is_lenient_hyphen;
use crate::validate::{validate_field_with, Field};
use std::io::Write;

/// Merge command: coalesce overlapping and adjacent intervals.
#[derive(Debug, Clone, Default)]
pub struct MergeCommand {
    /// Accept whitespace around the hyphen when checking text input
    pub lenient_hyphen: bool,
}

impl MergeCommand {
    /// Create a command using the process-wide hyphen mode.
    pub fn new() -> Self {
        Self {
            lenient_hyphen: is_lenient_hyphen(),
        }
    }

    pub fn with_lenient_hyphen(mut self, lenient: bool) -> Self {
        self.lenient_hyphen = lenient;
        self
    }

    /// Merge intervals into a sorted list with no overlap and no adjacency.
    pub fn merge(&self, intervals: Vec<Interval>) -> Vec<Interval> {
        merge_intervals(intervals)
    }

    /// Validate a list, merge it and write the rendered result.
    pub fn run<W: Write>(&self, text: Option<&str>, output: &mut W) -> Result<usize> {
        let intervals = validate_field_with(Field::Includes, text, true, self.lenient_hyphen)?;
        let merged = self.merge(intervals);

        let mut out = IntervalWriter::new(output);
        out.write_line(&merged)?;
        out.flush()?;

        Ok(merged.len())
    }
}

/// Sort by start and coalesce every interval that overlaps or touches the
/// last kept one.
///
/// Two consecutive output intervals `a, b` always satisfy `a.end < b.start - 1`.
pub fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    if intervals.is_empty() {
        return Vec::new();
    }

    intervals.sort_unstable_by_key(|iv| iv.start);

    let mut merged = Vec::new();
    let mut current = intervals[0];

    for interval in &intervals[1..] {
        if current.end < interval.start.saturating_sub(1) {
            // Gap of at least one integer: start a new span
            merged.push(current);
            current = *interval;
        } else {
            // Overlap or adjacency: extend the current span
            current.end = current.end.max(interval.end);
        }
    }

    merged.push(current);
    merged
}
