//! Inclusive integer intervals for numeric draws.

use std::fmt;

use crate::error::{FauxError, Result};
use crate::rng::RandomSource;

/// An inclusive integer interval `[lo, hi]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntRange {
    lo: i64,
    hi: i64,
}

impl IntRange {
    /// Create a range, failing with [`FauxError::InvalidRange`] if `lo > hi`
    pub fn new(lo: i64, hi: i64) -> Result<Self> {
        if lo > hi {
            return Err(FauxError::InvalidRange { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Range covering the half-open interval `[start, end)`
    pub fn half_open(start: i64, end: i64) -> Result<Self> {
        if start >= end {
            return Err(FauxError::InvalidRange { lo: start, hi: end });
        }
        Self::new(start, end - 1)
    }

    /// Lower bound
    pub fn lo(&self) -> i64 {
        self.lo
    }

    /// Upper bound
    pub fn hi(&self) -> i64 {
        self.hi
    }

    /// Whether `value` lies in the range
    pub fn contains(&self, value: i64) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Draw a value uniformly from the range
    pub fn draw(&self, source: &mut dyn RandomSource) -> i64 {
        source.int_inclusive(self.lo, self.hi)
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

impl TryFrom<std::ops::RangeInclusive<i64>> for IntRange {
    type Error = FauxError;

    fn try_from(range: std::ops::RangeInclusive<i64>) -> Result<Self> {
        Self::new(*range.start(), *range.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RngSource, SequenceSource};

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert!(matches!(
            IntRange::new(3, 2),
            Err(FauxError::InvalidRange { lo: 3, hi: 2 })
        ));
        assert!(IntRange::new(2, 2).is_ok());
    }

    #[test]
    fn test_half_open() {
        let range = IntRange::half_open(10, 3000).unwrap();
        assert_eq!(range.lo(), 10);
        assert_eq!(range.hi(), 2999);
        assert!(IntRange::half_open(5, 5).is_err());
    }

    #[test]
    fn test_draw_within_bounds() {
        let range = IntRange::new(2, 255).unwrap();
        let mut source = RngSource::seeded(1);
        for _ in 0..1000 {
            assert!(range.contains(range.draw(&mut source)));
        }
    }

    #[test]
    fn test_draw_with_sequence() {
        let range = IntRange::new(160, 255).unwrap();
        let mut source = SequenceSource::new(vec![0, 95, 96]);
        assert_eq!(range.draw(&mut source), 160);
        assert_eq!(range.draw(&mut source), 255);
        assert_eq!(range.draw(&mut source), 160);
    }

    #[test]
    fn test_try_from_and_display() {
        let range = IntRange::try_from(0..=65535).unwrap();
        assert_eq!(range.to_string(), "[0, 65535]");
        assert!(IntRange::try_from(1..=0).is_err());
    }
}
