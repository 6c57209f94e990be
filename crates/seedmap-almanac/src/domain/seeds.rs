//! Seed list interpretations
//!
//! The numbers on the `seeds:` line can be read two ways: as individual seeds,
//! or as `(start, length)` pairs describing ranges of seeds.

use crate::domain::interval::Interval;

/// Upper bound convention for seed ranges
///
/// `HalfOpen` yields exactly `length` values starting at `start`.
/// `Inclusive` also yields `start + length`, one extra value per range, which
/// matches the `seed <= start + length` loop some reference solvers use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RangeBound {
    #[default]
    HalfOpen,
    Inclusive,
}

/// `(start, length)` seed range
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeedRange {
    start: i64,
    length: i64,
}

/// Seed list interpretation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedSpecError {
    /// Range interpretation needs an even number of seeds
    #[error("seed ranges need (start, length) pairs, but {count} seed number(s) were given")]
    UnpairedSeed { count: usize },
    /// Range length below zero
    #[error("seed range length must be >= 0 (start = {start}, length = {length})")]
    NegativeRangeLength { start: i64, length: i64 },
    /// Range end does not fit in i64
    #[error("seed range end overflows (start = {start}, length = {length})")]
    RangeOverflow { start: i64, length: i64 },
}

impl SeedRange {
    /// Create a validated seed range
    ///
    /// The end must leave room for the inclusive convention's extra value.
    pub fn new(start: i64, length: i64) -> Result<Self, SeedSpecError> {
        if length < 0 {
            return Err(SeedSpecError::NegativeRangeLength { start, length });
        }
        if start
            .checked_add(length)
            .and_then(|end| end.checked_add(1))
            .is_none()
        {
            return Err(SeedSpecError::RangeOverflow { start, length });
        }

        Ok(Self { start, length })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    /// Values covered by the range as a half-open interval
    pub fn interval(&self, bound: RangeBound) -> Interval {
        let end = self.start + self.length;
        match bound {
            RangeBound::HalfOpen => Interval::new(self.start, end),
            RangeBound::Inclusive => Interval::new(self.start, end + 1),
        }
    }

    /// Iterate over every value in the range
    pub fn values(&self, bound: RangeBound) -> std::ops::Range<i64> {
        self.interval(bound).values()
    }

    /// Number of values in the range
    pub fn count(&self, bound: RangeBound) -> u64 {
        self.interval(bound).len()
    }
}

/// Interpretation of the seed numbers
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedSpec {
    /// Every number is a seed
    Individual(Vec<i64>),
    /// Numbers taken pairwise as `(start, length)`
    Ranges(Vec<SeedRange>),
}

impl SeedSpec {
    /// Read every number as a seed
    pub fn individual(seeds: &[i64]) -> Self {
        Self::Individual(seeds.to_vec())
    }

    /// Read the numbers as consecutive `(start, length)` pairs
    pub fn ranges(seeds: &[i64]) -> Result<Self, SeedSpecError> {
        if !seeds.len().is_multiple_of(2) {
            return Err(SeedSpecError::UnpairedSeed { count: seeds.len() });
        }

        let ranges = seeds
            .chunks_exact(2)
            .map(|pair| SeedRange::new(pair[0], pair[1]))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::Ranges(ranges))
    }

    /// Lazily produce every seed value
    pub fn values(&self, bound: RangeBound) -> Box<dyn Iterator<Item = i64> + '_> {
        match self {
            Self::Individual(seeds) => Box::new(seeds.iter().copied()),
            Self::Ranges(ranges) => Box::new(ranges.iter().flat_map(move |r| r.values(bound))),
        }
    }

    /// Total number of seed values, saturating at `u64::MAX`
    pub fn count(&self, bound: RangeBound) -> u64 {
        match self {
            Self::Individual(seeds) => seeds.len() as u64,
            Self::Ranges(ranges) => ranges
                .iter()
                .map(|r| r.count(bound))
                .fold(0u64, u64::saturating_add),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_expansion_half_open() {
        let spec = SeedSpec::ranges(&[79, 14, 55, 13]).unwrap();
        assert_eq!(spec.count(RangeBound::HalfOpen), 27);

        let values: Vec<i64> = spec.values(RangeBound::HalfOpen).collect();
        assert_eq!(values.len(), 27);
        assert_eq!(values.first(), Some(&79));
        assert!(values.contains(&92));
        assert!(!values.contains(&93));
        assert!(values.contains(&67));
        assert!(!values.contains(&68));
    }

    #[test]
    fn test_range_expansion_inclusive() {
        let spec = SeedSpec::ranges(&[79, 14, 55, 13]).unwrap();
        assert_eq!(spec.count(RangeBound::Inclusive), 29);

        let values: Vec<i64> = spec.values(RangeBound::Inclusive).collect();
        assert_eq!(values.len(), 29);
        assert!(values.contains(&93));
        assert!(values.contains(&68));
        assert!(!values.contains(&94));
    }

    #[test]
    fn test_zero_length_range() {
        let range = SeedRange::new(10, 0).unwrap();
        assert_eq!(range.count(RangeBound::HalfOpen), 0);
        assert_eq!(range.values(RangeBound::Inclusive).collect::<Vec<_>>(), vec![10]);
    }

    #[test]
    fn test_individual_ignores_bound() {
        let spec = SeedSpec::individual(&[79, 14, 55, 13]);
        assert_eq!(spec.count(RangeBound::Inclusive), 4);
        assert_eq!(
            spec.values(RangeBound::Inclusive).collect::<Vec<_>>(),
            vec![79, 14, 55, 13]
        );
    }

    #[test]
    fn test_count_saturates_on_huge_ranges() {
        const BIG: i64 = 9_000_000_000_000_000_000;
        let spec = SeedSpec::ranges(&[0, BIG, 0, BIG, 0, BIG]).unwrap();
        assert_eq!(spec.count(RangeBound::HalfOpen), u64::MAX);
        assert_eq!(spec.count(RangeBound::Inclusive), u64::MAX);

        let single = SeedSpec::ranges(&[0, BIG]).unwrap();
        assert_eq!(single.count(RangeBound::HalfOpen), BIG as u64);
    }

    #[test]
    fn test_unpaired_seed() {
        assert_eq!(
            SeedSpec::ranges(&[1, 2, 3]),
            Err(SeedSpecError::UnpairedSeed { count: 3 })
        );
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(matches!(
            SeedSpec::ranges(&[5, -1]),
            Err(SeedSpecError::NegativeRangeLength { .. })
        ));
        assert!(matches!(
            SeedSpec::ranges(&[i64::MAX, 0]),
            Err(SeedSpecError::RangeOverflow { .. })
        ));
    }
}
