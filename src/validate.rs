//! Advisory validation of parsed interval lists.
//!
//! The predicates are independent and total: each one answers a single
//! question about a parsed list and is vacuously true for an empty list.
//! [`validate_field`] composes them into the full list of problems for one
//! input field so every message can be shown at once.

use crate::interval::{to_intervals, Interval, ParsedInterval};
use crate::parse::{has_valid_format_with, parse_intervals};
use std::fmt;
use thiserror::Error;

/// Check that no bound is `NaN`.
pub fn are_valid_numbers(intervals: &[ParsedInterval]) -> bool {
    intervals
        .iter()
        .all(|iv| !iv.start.is_nan() && !iv.end.is_nan())
}

/// Check that every interval has `start <= end`.
///
/// A `NaN` bound compares false, so it fails this check too.
pub fn is_start_less_than_or_equal_to_end(intervals: &[ParsedInterval]) -> bool {
    intervals.iter().all(|iv| iv.start <= iv.end)
}

/// Check that every bound is a finite whole number.
pub fn are_integers(intervals: &[ParsedInterval]) -> bool {
    intervals
        .iter()
        .all(|iv| iv.start.is_integer() && iv.end.is_integer())
}

/// A single problem found in an input field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("Intervals must be in the format XX-YY, separated by commas. Negative numbers are not allowed.")]
    FormatInvalid,

    #[error("All intervals must be valid numbers separated by commas")]
    NotNumbers,

    #[error("Start of the interval must be equal to or less than the end")]
    StartAfterEnd,

    #[error("All interval values must be integers")]
    NotIntegers,

    #[error("Includes must have at least one interval.")]
    Missing,

    #[error("Interval values must fit in a 64-bit signed integer")]
    OutOfRange,
}

/// Which input a problem belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Includes,
    Excludes,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Includes => write!(f, "includes"),
            Field::Excludes => write!(f, "excludes"),
        }
    }
}

/// All problems found in one field, in reporting order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", render_issues(.field, .issues))]
pub struct FieldError {
    pub field: Field,
    pub issues: Vec<ValidationIssue>,
}

fn render_issues(field: &Field, issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", field, issue))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Problems in one or both fields of a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", render_errors(.errors))]
pub struct RequestError {
    pub errors: Vec<FieldError>,
}

fn render_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, FieldError>;

/// Validate one field and convert it to engine intervals.
///
/// A format failure is reported alone, since the remaining checks are
/// meaningless on malformed text. Otherwise every failing predicate is
/// reported, followed by `Missing` when `required` and the list is empty.
///
/// The format check is strict; see [`validate_field_with`].
pub fn validate_field(field: Field, text: Option<&str>, required: bool) -> Result<Vec<Interval>> {
    validate_field_with(field, text, required, false)
}

/// [`validate_field`] with an explicit hyphen mode for the format check.
pub fn validate_field_with(
    field: Field,
    text: Option<&str>,
    required: bool,
    lenient_hyphen: bool,
) -> Result<Vec<Interval>> {
    let fail = |issues: Vec<ValidationIssue>| FieldError { field, issues };

    if !has_valid_format_with(text, lenient_hyphen) {
        return Err(fail(vec![ValidationIssue::FormatInvalid]));
    }

    let parsed = parse_intervals(text);
    let issues = collect_issues(&parsed, required);
    if !issues.is_empty() {
        return Err(fail(issues));
    }

    to_intervals(&parsed).ok_or_else(|| fail(vec![ValidationIssue::OutOfRange]))
}

/// Run every predicate over a parsed list and collect the failures.
pub fn collect_issues(parsed: &[ParsedInterval], required: bool) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if !are_valid_numbers(parsed) {
        issues.push(ValidationIssue::NotNumbers);
    }
    if !is_start_less_than_or_equal_to_end(parsed) {
        issues.push(ValidationIssue::StartAfterEnd);
    }
    if !are_integers(parsed) {
        issues.push(ValidationIssue::NotIntegers);
    }
    if required && parsed.is_empty() {
        issues.push(ValidationIssue::Missing);
    }

    issues
}

/// Validate an include field (required) and an exclude field (optional).
///
/// Both fields are always checked, so a request with two bad fields reports both.
pub fn validate_request(
    includes: Option<&str>,
    excludes: Option<&str>,
) -> std::result::Result<(Vec<Interval>, Vec<Interval>), RequestError> {
    validate_request_with(includes, excludes, false)
}

/// [`validate_request`] with an explicit hyphen mode for the format check.
pub fn validate_request_with(
    includes: Option<&str>,
    excludes: Option<&str>,
    lenient_hyphen: bool,
) -> std::result::Result<(Vec<Interval>, Vec<Interval>), RequestError> {
    let includes = validate_field_with(Field::Includes, includes, true, lenient_hyphen);
    let excludes = validate_field_with(Field::Excludes, excludes, false, lenient_hyphen);

    match (includes, excludes) {
        (Ok(inc), Ok(exc)) => Ok((inc, exc)),
        (inc, exc) => Err(RequestError {
            errors: [inc.err(), exc.err()].into_iter().flatten().collect(),
        }),
    }
}
