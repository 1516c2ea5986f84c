//! Rangecut: closed integer interval subtraction.
//!
//! Given a list of include ranges and a list of exclude ranges, computes the
//! integers covered by the includes and by none of the excludes, as a
//! minimal sorted list of disjoint, non-adjacent ranges.
//!
//! Text input is a comma-separated list of `start-end` tokens. Parsing never
//! fails; problems are reported by independent validator predicates so a
//! caller can show every message at once.
//!
//! # Example
//!
//! ```rust
//! use rangecut::{format_intervals, process_intervals, validate::validate_request};
//!
//! let (includes, excludes) =
//!     validate_request(Some("200-300, 10-100, 400-500"), Some("410-420, 95-205, 100-150")).unwrap();
//! let result = process_intervals(&includes, &excludes);
//! assert_eq!(format_intervals(&result), "10-94, 206-300, 400-409, 421-500");
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod interval;
pub mod output;
pub mod parse;
pub mod validate;

// Re-export commonly used types
pub use commands::{merge_intervals, process_intervals, subtract_interval};
pub use error::RangecutError;
pub use interval::{to_intervals, Interval, Number, ParsedInterval};
pub use output::{format_intervals, write_intervals};
pub use parse::{has_valid_format, has_valid_format_with, parse_intervals};
pub use validate::{
    are_integers, are_valid_numbers, is_start_less_than_or_equal_to_end, validate_field,
    validate_field_with, validate_request, validate_request_with, Field, FieldError,
    RequestError, ValidationIssue,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::commands::{GenerateCommand, MergeCommand, SubtractCommand};
    pub use crate::interval::{Interval, ParsedInterval};
    pub use crate::output::format_intervals;
    pub use crate::parse::{has_valid_format, parse_intervals};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_basic_workflow() {
        use crate::interval::to_intervals;
        use crate::parse::parse_intervals;
        use crate::{format_intervals, process_intervals};

        let includes = to_intervals(&parse_intervals(Some("10-100"))).unwrap();
        let excludes = to_intervals(&parse_intervals(Some("20-30"))).unwrap();

        let result = process_intervals(&includes, &excludes);
        assert_eq!(format_intervals(&result), "10-19, 31-100");
    }

    #[test]
    fn test_merge_workflow() {
        use crate::commands::MergeCommand;
        use crate::interval::Interval;

        let cmd = MergeCommand::default();
        let merged = cmd.merge(vec![Interval::new(100, 200), Interval::new(150, 250)]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].start, 100);
        assert_eq!(merged[0].end, 250);
    }
}
