//! Remapping rule implementation
//!
//! A rule moves a contiguous block of source values onto a block of
//! destination values of the same length.

use crate::domain::interval::Interval;

/// Single contiguous interval rewrite
///
/// Maps `[source_start, source_start + length)` onto
/// `[dest_start, dest_start + length)` by the constant offset
/// `dest_start - source_start`.
///
/// Construction validates that the length is positive and that no bound or
/// offset overflows `i64`, so mapping a covered value never overflows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    source_start: i64,
    dest_start: i64,
    length: i64,
}

/// Rule validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// Length is zero or negative
    #[error(
        "rule length must be > 0 (dest_start = {dest_start}, source_start = {source_start}, length = {length})"
    )]
    NonPositiveLength {
        source_start: i64,
        dest_start: i64,
        length: i64,
    },
    /// `source_start + length` does not fit in i64
    #[error("source end overflows (source_start = {source_start}, length = {length})")]
    SourceOverflow { source_start: i64, length: i64 },
    /// `dest_start + length` does not fit in i64
    #[error("destination end overflows (dest_start = {dest_start}, length = {length})")]
    DestinationOverflow { dest_start: i64, length: i64 },
    /// `dest_start - source_start` does not fit in i64
    #[error("offset overflows (dest_start = {dest_start}, source_start = {source_start})")]
    OffsetOverflow { source_start: i64, dest_start: i64 },
}

impl Rule {
    /// Create a validated rule
    pub fn new(source_start: i64, dest_start: i64, length: i64) -> Result<Self, RuleError> {
        if length <= 0 {
            return Err(RuleError::NonPositiveLength {
                source_start,
                dest_start,
                length,
            });
        }
        if source_start.checked_add(length).is_none() {
            return Err(RuleError::SourceOverflow {
                source_start,
                length,
            });
        }
        if dest_start.checked_add(length).is_none() {
            return Err(RuleError::DestinationOverflow { dest_start, length });
        }
        if dest_start.checked_sub(source_start).is_none() {
            return Err(RuleError::OffsetOverflow {
                source_start,
                dest_start,
            });
        }

        Ok(Self {
            source_start,
            dest_start,
            length,
        })
    }

    pub fn source_start(&self) -> i64 {
        self.source_start
    }

    pub fn dest_start(&self) -> i64 {
        self.dest_start
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    /// End of the source block, exclusive
    pub fn source_end(&self) -> i64 {
        self.source_start + self.length
    }

    /// Distance from a source value to its destination value
    pub fn offset(&self) -> i64 {
        self.dest_start - self.source_start
    }

    /// Source block as a half-open interval
    pub fn source(&self) -> Interval {
        Interval::new(self.source_start, self.source_end())
    }

    /// Check whether the rule covers `value`
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.source_start <= value && value < self.source_end()
    }

    /// Map `value` if the rule covers it
    #[inline]
    pub fn try_map(&self, value: i64) -> Option<i64> {
        self.contains(value).then(|| value + self.offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_accessors() {
        let rule = Rule::new(98, 50, 2).unwrap();
        assert_eq!(rule.source_start(), 98);
        assert_eq!(rule.dest_start(), 50);
        assert_eq!(rule.length(), 2);
        assert_eq!(rule.source_end(), 100);
        assert_eq!(rule.offset(), -48);
        assert_eq!(rule.source(), Interval::new(98, 100));
    }

    #[test]
    fn test_try_map_bounds() {
        let rule = Rule::new(98, 50, 2).unwrap();
        assert_eq!(rule.try_map(97), None);
        assert_eq!(rule.try_map(98), Some(50));
        assert_eq!(rule.try_map(99), Some(51));
        assert_eq!(rule.try_map(100), None);
    }

    #[test]
    fn test_rejects_non_positive_length() {
        assert!(matches!(
            Rule::new(0, 10, 0),
            Err(RuleError::NonPositiveLength { length: 0, .. })
        ));
        assert!(matches!(
            Rule::new(0, 10, -3),
            Err(RuleError::NonPositiveLength { length: -3, .. })
        ));
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(matches!(
            Rule::new(i64::MAX, 0, 1),
            Err(RuleError::SourceOverflow { .. })
        ));
        assert!(matches!(
            Rule::new(0, i64::MAX, 1),
            Err(RuleError::DestinationOverflow { .. })
        ));
        assert!(matches!(
            Rule::new(i64::MIN, 0, 1),
            Err(RuleError::OffsetOverflow { .. })
        ));
    }

    #[test]
    fn test_error_message_mentions_values() {
        let err = Rule::new(7, 3, 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "rule length must be > 0 (dest_start = 3, source_start = 7, length = 0)"
        );
    }
}
