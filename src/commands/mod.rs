//! Command implementations for rangecut.

pub mod generate;
pub mod merge;
pub mod subtract;

pub use generate::{GenerateCommand, GenerateConfig};
pub use merge::{merge_intervals, MergeCommand};
pub use subtract::{
    process_intervals, subtract_all, subtract_interval, SubtractCommand, SubtractStats,
};
