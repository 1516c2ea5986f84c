//! Interval list parser and raw format check.
//!
//! Input text is a comma-separated list of `start-end` tokens. Parsing is
//! lenient and never fails: bad numbers become `NaN` bounds and reversed
//! bounds are kept as-is, so the validator can report every problem at once.

use crate::interval::{Number, ParsedInterval};
use memchr::memchr;

/// Parse a comma-separated list of `start-end` tokens.
///
/// Absent, empty and blank input all yield an empty list. Tokens are kept
/// in source order.
///
/// # Example
///
/// ```
/// use rangecut::parse::parse_intervals;
///
/// let intervals = parse_intervals(Some("10-100, 20-30"));
/// assert_eq!(intervals.len(), 2);
/// assert_eq!(intervals[1].start, 20.0);
/// ```
pub fn parse_intervals(text: Option<&str>) -> Vec<ParsedInterval> {
    let text = match text {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Vec::new(),
    };

    text.split(',').map(parse_token).collect()
}

/// Split one token on hyphens and convert the first two pieces.
///
/// The token is not trimmed before splitting; each piece is trimmed by the
/// numeric conversion instead. A missing end converts to `NaN`.
#[inline]
fn parse_token(token: &str) -> ParsedInterval {
    let mut pieces = token.split('-');
    let start = pieces.next().map_or(Number::Float(f64::NAN), to_number);
    let end = pieces.next().map_or(Number::Float(f64::NAN), to_number);
    ParsedInterval::new(start, end)
}

/// Convert a text piece to a number the way the form layer did.
///
/// - surrounding whitespace is ignored and an empty piece is `0`
/// - plain integers that fit in `i64` are kept exact
/// - decimal literals with optional sign, fraction and exponent
/// - `0x`/`0o`/`0b` prefixed integers
/// - `Infinity` with optional sign
/// - everything else is `NaN`
pub fn to_number(piece: &str) -> Number {
    let s = piece.trim();
    if s.is_empty() {
        return Number::Int(0);
    }

    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if is_digits(unsigned) {
        if let Ok(n) = s.parse::<i64>() {
            return Number::Int(n);
        }
    }

    if let Some(n) = parse_prefixed_integer(s) {
        return n;
    }

    if unsigned == "Infinity" {
        return Number::Float(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // f64::from_str also accepts "inf" and "nan" spellings, which are not numbers here
    if s.bytes()
        .any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E')
    {
        return Number::Float(f64::NAN);
    }

    Number::Float(s.parse().unwrap_or(f64::NAN))
}

fn parse_prefixed_integer(s: &str) -> Option<Number> {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if let Ok(n) = i64::from_str_radix(digits, radix) {
        // from_str_radix takes a sign, the prefixed form does not
        if !digits.starts_with(['+', '-']) {
            return Some(Number::Int(n));
        }
    }

    // Too wide for i64 (or malformed): fall back to a double
    let mut value = 0.0_f64;
    for c in digits.chars() {
        let d = match c.to_digit(radix) {
            Some(d) => d,
            None => return Some(Number::Float(f64::NAN)),
        };
        value = value * radix as f64 + d as f64;
    }
    Some(Number::Float(value))
}

/// Check that every comma-separated token is `digits-digits`.
///
/// Each token is trimmed first. Absent or empty text passes. Negative
/// numbers, extra hyphens, whitespace around the hyphen and any other
/// characters fail. See [`has_valid_format_with`] for the lenient form.
///
/// # Example
///
/// ```
/// use rangecut::parse::has_valid_format;
///
/// assert!(has_valid_format(None));
/// assert!(has_valid_format(Some("10-20, 30-40")));
/// assert!(!has_valid_format(Some("-5-10")));
/// ```
pub fn has_valid_format(text: Option<&str>) -> bool {
    has_valid_format_with(text, false)
}

/// Format check with an explicit hyphen mode.
///
/// When `lenient_hyphen` is set, whitespace around the hyphen is accepted
/// (`"10 - 20"`).
pub fn has_valid_format_with(text: Option<&str>, lenient_hyphen: bool) -> bool {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return true,
    };

    text.split(',')
        .all(|token| is_valid_token(token.trim(), lenient_hyphen))
}

#[inline]
fn is_valid_token(token: &str, lenient: bool) -> bool {
    let bytes = token.as_bytes();
    let hyphen = match memchr(b'-', bytes) {
        Some(pos) => pos,
        None => return false,
    };

    let (mut left, mut right) = (&token[..hyphen], &token[hyphen + 1..]);
    if lenient {
        left = left.trim_end();
        right = right.trim_start();
    }

    is_digits(left) && is_digits(right)
}

#[inline]
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
