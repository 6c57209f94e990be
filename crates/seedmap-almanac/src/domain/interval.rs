//! Half-open integer intervals
//!
//! Intervals are the unit of work for the interval-propagation scan: a seed
//! range enters the pipeline as one interval and is split at rule boundaries
//! as it passes through each table.

/// Half-open interval `[start, end)`
///
/// An interval with `start >= end` is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    /// First value in the interval
    pub start: i64,
    /// One past the last value in the interval
    pub end: i64,
}

/// Result of cutting an interval against another one
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Split {
    /// Part lying before the cut
    pub before: Option<Interval>,
    /// Part covered by the cut
    pub inside: Option<Interval>,
    /// Part lying after the cut
    pub after: Option<Interval>,
}

impl Interval {
    /// Create a new interval
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Check whether the interval holds no values
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Number of values in the interval
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            (i128::from(self.end) - i128::from(self.start)) as u64
        }
    }

    /// Check whether `value` lies inside the interval
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value < self.end
    }

    /// Overlap of two intervals, if any
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        let overlap = Interval::new(self.start.max(other.start), self.end.min(other.end));
        (!overlap.is_empty()).then_some(overlap)
    }

    /// Move the interval by a constant offset
    ///
    /// The caller guarantees both bounds stay within `i64`.
    pub fn shift(&self, offset: i64) -> Interval {
        Interval::new(self.start + offset, self.end + offset)
    }

    /// Cut this interval against `cut`, keeping only non-empty parts
    pub fn split(&self, cut: &Interval) -> Split {
        if self.is_empty() {
            return Split::default();
        }

        let before = Interval::new(self.start, self.end.min(cut.start));
        let after = Interval::new(self.start.max(cut.end), self.end);

        Split {
            before: (!before.is_empty()).then_some(before),
            inside: self.intersect(cut),
            after: (!after.is_empty()).then_some(after),
        }
    }

    /// Iterate over every value in the interval
    pub fn values(&self) -> std::ops::Range<i64> {
        self.start..self.end.max(self.start)
    }
}

/// Sort intervals and merge the ones that overlap or touch
///
/// Empty intervals are dropped.
pub fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.retain(|interval| !interval.is_empty());
    intervals.sort_unstable();

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if interval.start <= last.end => last.end = last.end.max(interval.end),
            _ => merged.push(interval),
        }
    }

    merged
}
