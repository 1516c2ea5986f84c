//! Global configuration for rangecut runtime behavior.
//!
//! This module provides thread-safe global configuration read by the
//! command constructors. The parsing and validation functions never read
//! it; they take the setting as an argument.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag for accepting whitespace around the hyphen of a token.
///
/// When disabled (the default), the format check requires each trimmed
/// token to be exactly `digits-digits`, so `"10 - 20"` is rejected even
/// though the parser itself would read it as `10-20`.
///
/// This is set once at startup and picked up by `SubtractCommand::new` and
/// `MergeCommand::new`.
static LENIENT_HYPHEN: AtomicBool = AtomicBool::new(false);

/// Enable or disable lenient hyphen mode.
///
/// # Example
///
/// ```
/// use rangecut::commands::SubtractCommand;
/// use rangecut::config;
///
/// config::set_lenient_hyphen(true);
/// let cmd = SubtractCommand::new();
/// config::set_lenient_hyphen(false);
///
/// let mut out = Vec::new();
/// cmd.run(Some("10 - 100"), Some("20-30"), &mut out).unwrap();
/// assert_eq!(out, b"10-19, 31-100\n");
/// ```
#[inline]
pub fn set_lenient_hyphen(enabled: bool) {
    LENIENT_HYPHEN.store(enabled, Ordering::Release);
}

/// Check if lenient hyphen mode is enabled.
#[inline]
pub fn is_lenient_hyphen() -> bool {
    LENIENT_HYPHEN.load(Ordering::Acquire)
}
