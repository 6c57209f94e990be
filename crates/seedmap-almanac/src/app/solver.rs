//! Almanac solving workflow
//!
//! Computes the lowest location for both readings of the seed list.

use crate::app::locator::{ScanStrategy, lowest_location};
use crate::domain::almanac::Almanac;
use crate::domain::seeds::{RangeBound, SeedSpecError};
use std::time::Instant;
use tracing::info;

/// Options for solving an almanac
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveOptions {
    /// How the minimum is searched for
    pub strategy: ScanStrategy,
    /// Upper bound convention for seed ranges
    pub range_bound: RangeBound,
}

impl SolveOptions {
    /// Set the scan strategy
    pub fn with_strategy(mut self, strategy: ScanStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the range bound convention
    pub fn with_range_bound(mut self, range_bound: RangeBound) -> Self {
        self.range_bound = range_bound;
        self
    }
}

/// Lowest locations for both seed interpretations
///
/// `None` means the interpretation produced no seed values at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Answers {
    /// Every seed number read as a seed
    pub individual: Option<i64>,
    /// Seed numbers read as `(start, length)` ranges
    pub ranges: Option<i64>,
}

/// Solve errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// Seed numbers do not form valid ranges
    #[error("invalid seed ranges: {0}")]
    Seeds(#[from] SeedSpecError),
}

/// Lowest location when every seed number is a seed
pub fn solve_individual(almanac: &Almanac, options: &SolveOptions) -> Option<i64> {
    lowest_location(
        &almanac.individual_seeds(),
        &almanac.pipeline,
        options.strategy,
        options.range_bound,
    )
}

/// Lowest location when seed numbers are `(start, length)` ranges
pub fn solve_ranges(almanac: &Almanac, options: &SolveOptions) -> Result<Option<i64>, SolveError> {
    let spec = almanac.seed_ranges()?;
    Ok(lowest_location(
        &spec,
        &almanac.pipeline,
        options.strategy,
        options.range_bound,
    ))
}

/// Solve both readings of the seed list
pub fn solve(almanac: &Almanac, options: &SolveOptions) -> Result<Answers, SolveError> {
    let start = Instant::now();

    let individual = solve_individual(almanac, options);
    let ranges = solve_ranges(almanac, options)?;

    info!(
        strategy = ?options.strategy,
        range_bound = ?options.range_bound,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "solved almanac"
    );

    Ok(Answers { individual, ranges })
}
