//! Subtract command implementation.
//!
//! Each include interval is cut by every exclude interval in turn, then the
//! surviving pieces of all includes are merged into a minimal sorted cover.

use crate::commands::merge::merge_intervals;
use crate::error::Result;
use crate::interval::Interval;
use crate::output::IntervalWriter;
use crate::config::is_lenient_hyphen;
use crate::validate::validate_request_with;
use std::fmt;
use std::io::Write;

/// Statistics from one subtract run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtractStats {
    /// Number of include intervals processed
    pub includes: usize,
    /// Number of exclude intervals processed
    pub excludes: usize,
    /// Number of pieces left before merging
    pub pieces: usize,
    /// Number of include intervals removed entirely
    pub removed: usize,
    /// Number of intervals in the merged result
    pub merged: usize,
    /// Number of integers covered by the merged result
    pub covered: u64,
}

impl fmt::Display for SubtractStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Includes: {}, Excludes: {}, Pieces: {}, Removed: {}, Merged: {}, Covered: {}",
            self.includes, self.excludes, self.pieces, self.removed, self.merged, self.covered
        )
    }
}

/// Subtract command configuration.
#[derive(Debug, Clone, Default)]
pub struct SubtractCommand {
    /// Accept whitespace around the hyphen when checking text input
    pub lenient_hyphen: bool,
}

impl SubtractCommand {
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

    /// Subtract all excludes from all includes and merge the result.
    pub fn process(&self, includes: &[Interval], excludes: &[Interval]) -> Vec<Interval> {
        self.process_with_stats(includes, excludes).0
    }

    /// Same as [`SubtractCommand::process`], also reporting statistics.
    pub fn process_with_stats(
        &self,
        includes: &[Interval],
        excludes: &[Interval],
    ) -> (Vec<Interval>, SubtractStats) {
        let mut stats = SubtractStats {
            includes: includes.len(),
            excludes: excludes.len(),
            ..Default::default()
        };

        let mut pieces = Vec::new();
        for include in includes {
            let remaining = subtract_all(include, excludes);
            if remaining.is_empty() {
                stats.removed += 1;
            }
            pieces.extend(remaining);
        }
        stats.pieces = pieces.len();

        let merged = merge_intervals(pieces);
        stats.merged = merged.len();
        stats.covered = merged
            .iter()
            .fold(0u64, |acc, iv| acc.saturating_add(iv.len()));

        (merged, stats)
    }

    /// Validate both fields, subtract, and write the rendered result.
    pub fn run<W: Write>(
        &self,
        includes: Option<&str>,
        excludes: Option<&str>,
        output: &mut W,
    ) -> Result<SubtractStats> {
        let (includes, excludes) = validate_request_with(includes, excludes, self.lenient_hyphen)?;
        let (result, stats) = self.process_with_stats(&includes, &excludes);

        let mut out = IntervalWriter::new(output);
        out.write_line(&result)?;
        out.flush()?;

        Ok(stats)
    }
}

/// Remove one exclude interval from one include interval.
///
/// Returns the include unchanged when they do not overlap, otherwise the
/// left remainder `[include.start, exclude.start - 1]` and/or the right
/// remainder `[exclude.end + 1, include.end]`. Empty when fully covered.
#[inline]
pub fn subtract_interval(include: &Interval, exclude: &Interval) -> Vec<Interval> {
    include.subtract(exclude)
}

/// Run one include interval through every exclude, in order.
pub fn subtract_all(include: &Interval, excludes: &[Interval]) -> Vec<Interval> {
    let mut remaining = vec![*include];
    for exclude in excludes {
        let mut next = Vec::with_capacity(remaining.len() + 1);
        for piece in &remaining {
            next.extend(subtract_interval(piece, exclude));
        }
        remaining = next;
    }
    remaining
}

/// Subtract `excludes` from `includes` and return the merged, sorted cover.
///
/// # Example
///
/// ```
/// use rangecut::{process_intervals, Interval};
///
/// let result = process_intervals(&[Interval::new(10, 100)], &[Interval::new(20, 30)]);
/// assert_eq!(result, vec![Interval::new(10, 19), Interval::new(31, 100)]);
/// ```
pub fn process_intervals(includes: &[Interval], excludes: &[Interval]) -> Vec<Interval> {
    SubtractCommand::default().process(includes, excludes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: i64, end: i64) -> Interval {
        Interval::new(start, end)
    }

    #[test]
    fn test_basic_subtract() {
        let result = process_intervals(&[iv(10, 100)], &[iv(20, 30)]);
        assert_eq!(result, vec![iv(10, 19), iv(31, 100)]);
    }

    #[test]
    fn test_subtract_no_overlap() {
        let result = subtract_interval(&iv(100, 200), &iv(300, 400));
        assert_eq!(result, vec![iv(100, 200)]);
    }

    #[test]
    fn test_subtract_complete_overlap() {
        let result = process_intervals(&[iv(10, 20)], &[iv(5, 25)]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_subtract_left_and_right_cut() {
        assert_eq!(subtract_interval(&iv(10, 20), &iv(5, 12)), vec![iv(13, 20)]);
        assert_eq!(subtract_interval(&iv(10, 20), &iv(18, 25)), vec![iv(10, 17)]);
    }

    #[test]
    fn test_subtract_multiple_excludes() {
        let pieces = subtract_all(&iv(100, 500), &[iv(150, 200), iv(300, 350)]);
        assert_eq!(pieces, vec![iv(100, 149), iv(201, 299), iv(351, 500)]);
    }

    #[test]
    fn test_exclude_spans_two_includes() {
        let result = process_intervals(&[iv(200, 300), iv(50, 150)], &[iv(95, 205)]);
        assert_eq!(result, vec![iv(50, 94), iv(206, 300)]);
    }

    #[test]
    fn test_mixed_excludes() {
        let result = process_intervals(
            &[iv(200, 300), iv(10, 100), iv(400, 500)],
            &[iv(410, 420), iv(95, 205), iv(100, 150)],
        );
        assert_eq!(result, vec![iv(10, 94), iv(206, 300), iv(400, 409), iv(421, 500)]);
    }

    #[test]
    fn test_no_excludes_merges_includes() {
        let result = process_intervals(&[iv(50, 5000), iv(10, 100)], &[]);
        assert_eq!(result, vec![iv(10, 5000)]);
    }

    #[test]
    fn test_no_includes() {
        assert!(process_intervals(&[], &[iv(1, 10)]).is_empty());
        assert!(process_intervals(&[], &[]).is_empty());
    }

    #[test]
    fn test_stats() {
        let cmd = SubtractCommand::default();
        let (result, stats) =
            cmd.process_with_stats(&[iv(10, 100), iv(200, 210)], &[iv(20, 30), iv(195, 215)]);

        assert_eq!(result, vec![iv(10, 19), iv(31, 100)]);
        assert_eq!(
            stats,
            SubtractStats {
                includes: 2,
                excludes: 2,
                pieces: 2,
                removed: 1,
                merged: 2,
                covered: 80,
            }
        );
        assert_eq!(
            stats.to_string(),
            "Includes: 2, Excludes: 2, Pieces: 2, Removed: 1, Merged: 2, Covered: 80"
        );
    }

    #[test]
    fn test_stats_covered_saturates() {
        let cmd = SubtractCommand::default();
        let (_, stats) = cmd.process_with_stats(&[iv(i64::MIN, i64::MAX)], &[]);
        assert_eq!(stats.covered, u64::MAX);
    }

    #[test]
    fn test_run_writes_result() {
        let cmd = SubtractCommand::default();
        let mut out = Vec::new();
        let stats = cmd.run(Some("10-100"), Some("20-30"), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "10-19, 31-100\n");
        assert_eq!(stats.merged, 2);
    }

    #[test]
    fn test_run_hyphen_mode() {
        let mut out = Vec::new();
        let strict = SubtractCommand::default().run(Some("10 - 100"), None, &mut out);
        assert!(strict.is_err());

        let cmd = SubtractCommand::default().with_lenient_hyphen(true);
        cmd.run(Some("10 - 100"), Some("20 -30"), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "10-19, 31-100\n");
    }

    #[test]
    fn test_run_beyond_f64_precision() {
        // 2^53 + 1 must be removed exactly, not rounded to a neighbour
        let mut out = Vec::new();
        SubtractCommand::default()
            .run(
                Some("0-9007199254740995"),
                Some("9007199254740993-9007199254740993"),
                &mut out,
            )
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0-9007199254740992, 9007199254740994-9007199254740995\n"
        );
    }

    #[test]
    fn test_run_rejects_invalid_fields() {
        let cmd = SubtractCommand::default();
        let mut out = Vec::new();
        let err = cmd.run(Some("10-5"), Some("x"), &mut out).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("includes: Start of the interval must be equal to or less than the end"));
        assert!(message.contains("excludes: Intervals must be in the format XX-YY"));
        assert!(out.is_empty());
    }
}
