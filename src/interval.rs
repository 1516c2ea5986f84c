//! Core interval types for closed integer ranges.

use std::cmp::Ordering;
use std::fmt;

/// A closed integer interval `[start, end]`.
///
/// No validation happens at construction: `start > end` can be built and is
/// only reported by the validator predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    /// Create a new interval.
    #[inline]
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Number of integers covered. Zero when `start > end`, saturates at `u64::MAX`.
    #[inline]
    pub fn len(&self) -> u64 {
        if self.start > self.end {
            0
        } else {
            self.end.abs_diff(self.start).saturating_add(1)
        }
    }

    /// Returns true if the interval covers no integers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Check if this interval overlaps with another.
    ///
    /// Closed bounds: sharing a single boundary point counts.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        !(other.end < self.start || other.start > self.end)
    }

    /// Remove `exclude` from this interval, returning the 0, 1 or 2 remaining pieces.
    pub fn subtract(&self, exclude: &Interval) -> Vec<Interval> {
        if !self.overlaps(exclude) {
            return vec![*self];
        }

        let mut result = Vec::with_capacity(2);

        // Left piece
        if exclude.start > self.start {
            result.push(Interval::new(self.start, exclude.start.saturating_sub(1)));
        }

        // Right piece
        if exclude.end < self.end {
            result.push(Interval::new(exclude.end.saturating_add(1), self.end));
        }

        result
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then(self.end.cmp(&other.end))
    }
}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A parsed bound.
///
/// Plain digit strings are kept exact as `Int`. Everything else the number
/// conversion accepts (fractions, exponents, infinities) and `NaN` is a
/// `Float`. Equality and ordering compare numeric values across variants.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Returns true for the not-a-number value.
    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self, Number::Float(v) if v.is_nan())
    }

    /// Returns true for finite whole numbers, whatever their magnitude.
    #[inline]
    pub fn is_integer(&self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(v) => v.is_finite() && v.fract() == 0.0,
        }
    }

    /// Exact `i64` value, if the number is a whole number in range.
    #[inline]
    pub fn to_i64(&self) -> Option<i64> {
        match *self {
            Number::Int(n) => Some(n),
            Number::Float(v) => float_to_i64(v),
        }
    }

    /// Nearest double.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(n) => n as f64,
            Number::Float(v) => v,
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        *self == Number::Float(*other)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.to_i64(), other.to_i64()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

/// An interval as read from text, before validation.
///
/// Bounds may be `NaN`, fractional or infinite so that every problem
/// survives parsing and can be reported by the validator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedInterval {
    pub start: Number,
    pub end: Number,
}

impl ParsedInterval {
    /// Create a new parsed interval.
    #[inline]
    pub fn new(start: impl Into<Number>, end: impl Into<Number>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Convert to an engine interval.
    ///
    /// Returns None unless both bounds are whole numbers that fit in `i64`.
    /// Ordering of the bounds is not checked.
    pub fn to_interval(&self) -> Option<Interval> {
        Some(Interval::new(self.start.to_i64()?, self.end.to_i64()?))
    }
}

/// Convert a whole parsed sequence, all or nothing.
pub fn to_intervals(parsed: &[ParsedInterval]) -> Option<Vec<Interval>> {
    parsed.iter().map(ParsedInterval::to_interval).collect()
}

/// 2^63 as a double; every finite integral value below it (and >= -2^63) fits in i64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

#[inline]
fn float_to_i64(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&value) {
        Some(value as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_overlap() {
        let a = Interval::new(100, 200);
        let b = Interval::new(150, 250);
        let c = Interval::new(200, 300);
        let d = Interval::new(201, 300);

        assert!(a.overlaps(&b));
        assert!(a.overlaps(&c)); // Shared boundary point
        assert!(!a.overlaps(&d)); // Adjacent, not overlapping
    }

    #[test]
    fn test_interval_len() {
        assert_eq!(Interval::new(10, 19).len(), 10);
        assert_eq!(Interval::new(5, 5).len(), 1);
        assert_eq!(Interval::new(6, 5).len(), 0);
        assert!(Interval::new(6, 5).is_empty());
        assert_eq!(Interval::new(i64::MIN, i64::MAX).len(), u64::MAX);
    }

    #[test]
    fn test_interval_subtract_middle() {
        let pieces = Interval::new(10, 100).subtract(&Interval::new(20, 30));
        assert_eq!(pieces, vec![Interval::new(10, 19), Interval::new(31, 100)]);
    }

    #[test]
    fn test_interval_subtract_edges() {
        let a = Interval::new(10, 20);

        // Touching on the left boundary removes one point
        assert_eq!(a.subtract(&Interval::new(0, 10)), vec![Interval::new(11, 20)]);
        // Touching on the right boundary
        assert_eq!(a.subtract(&Interval::new(20, 30)), vec![Interval::new(10, 19)]);
        // Disjoint passes through
        assert_eq!(a.subtract(&Interval::new(21, 30)), vec![a]);
        // Full cover
        assert!(a.subtract(&Interval::new(5, 25)).is_empty());
        assert!(a.subtract(&a).is_empty());
    }

    #[test]
    fn test_interval_subtract_extremes() {
        let a = Interval::new(i64::MIN, i64::MAX);
        let pieces = a.subtract(&Interval::new(0, 0));
        assert_eq!(
            pieces,
            vec![Interval::new(i64::MIN, -1), Interval::new(1, i64::MAX)]
        );
    }

    #[test]
    fn test_interval_display() {
        assert_eq!(Interval::new(10, 19).to_string(), "10-19");
        assert_eq!(Interval::new(-5, 3).to_string(), "-5-3");
    }

    #[test]
    fn test_interval_ordering() {
        let mut intervals = [
            Interval::new(200, 300),
            Interval::new(10, 50),
            Interval::new(10, 20),
        ];
        intervals.sort();

        assert_eq!(intervals[0], Interval::new(10, 20));
        assert_eq!(intervals[1], Interval::new(10, 50));
        assert_eq!(intervals[2], Interval::new(200, 300));
    }

    #[test]
    fn test_parsed_to_interval() {
        assert_eq!(
            ParsedInterval::new(10.0, 20.0).to_interval(),
            Some(Interval::new(10, 20))
        );
        // Ordering is not checked here
        assert_eq!(
            ParsedInterval::new(20.0, 10.0).to_interval(),
            Some(Interval::new(20, 10))
        );
        assert_eq!(ParsedInterval::new(f64::NAN, 10.0).to_interval(), None);
        assert_eq!(ParsedInterval::new(1.5, 10.0).to_interval(), None);
        assert_eq!(ParsedInterval::new(1.0, f64::INFINITY).to_interval(), None);
        assert_eq!(ParsedInterval::new(1.0, 1e19).to_interval(), None);
    }

    #[test]
    fn test_to_intervals_all_or_nothing() {
        let ok = [ParsedInterval::new(1.0, 2.0), ParsedInterval::new(3.0, 4.0)];
        assert_eq!(
            to_intervals(&ok),
            Some(vec![Interval::new(1, 2), Interval::new(3, 4)])
        );

        let bad = [ParsedInterval::new(1.0, 2.0), ParsedInterval::new(f64::NAN, 4.0)];
        assert_eq!(to_intervals(&bad), None);
        assert_eq!(to_intervals(&[]), Some(Vec::new()));
    }

    #[test]
    fn test_number_exact_above_f64_precision() {
        // 2^53 + 1 has no exact double
        let n = Number::Int(9_007_199_254_740_993);
        assert_eq!(n.to_i64(), Some(9_007_199_254_740_993));
        assert!(n.is_integer());
        assert!(!n.is_nan());
        assert!(Number::Int(9_007_199_254_740_992) < n);
        assert_eq!(
            ParsedInterval::new(0_i64, i64::MAX).to_interval(),
            Some(Interval::new(0, i64::MAX))
        );
    }

    #[test]
    fn test_number_compares_across_variants() {
        assert_eq!(Number::Int(10), Number::Float(10.0));
        assert!(Number::Int(10) < Number::Float(10.5));
        assert!(Number::Float(f64::NEG_INFINITY) < Number::Int(i64::MIN));
        assert!(Number::Float(f64::NAN) != Number::Float(f64::NAN));
        assert!(Number::Float(f64::NAN).partial_cmp(&Number::Int(1)).is_none());
    }
}
