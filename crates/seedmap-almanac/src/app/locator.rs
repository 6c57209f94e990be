//! Lowest-location search
//!
//! Three strategies find the minimum location over a seed spec. They differ
//! only in cost and always agree on the result:
//!
//! - `Sequential`: evaluate every seed value on the current thread
//! - `Parallel`: the same per-value scan, split across rayon workers
//! - `Intervals`: push whole seed ranges through the pipeline as intervals,
//!   splitting at rule boundaries, and take the smallest resulting start

use crate::domain::interval::Interval;
use crate::domain::pipeline::Pipeline;
use crate::domain::seeds::{RangeBound, SeedSpec};
use rayon::prelude::*;
use tracing::debug_span;

/// How the minimum location is searched for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScanStrategy {
    /// Per-value scan on one thread
    Sequential,
    /// Per-value scan across the rayon thread pool
    Parallel,
    /// Interval propagation through each table
    #[default]
    Intervals,
}

/// Minimum location over a finite sequence of seeds
///
/// Returns `None` for an empty sequence. A location of `0` is a real answer.
pub fn minimum_location<I>(seeds: I, pipeline: &Pipeline) -> Option<i64>
where
    I: IntoIterator<Item = i64>,
{
    seeds.into_iter().map(|seed| pipeline.evaluate(seed)).min()
}

/// Minimum location over a set of seed intervals
pub fn minimum_location_of_intervals(
    intervals: Vec<Interval>,
    pipeline: &Pipeline,
) -> Option<i64> {
    // evaluate_intervals returns sorted, non-empty intervals
    pipeline
        .evaluate_intervals(intervals)
        .first()
        .map(|interval| interval.start)
}

/// Find the lowest location for a seed spec
pub fn lowest_location(
    spec: &SeedSpec,
    pipeline: &Pipeline,
    strategy: ScanStrategy,
    bound: RangeBound,
) -> Option<i64> {
    let _span = debug_span!(
        "lowest_location",
        ?strategy,
        ?bound,
        seeds = spec.count(bound)
    )
    .entered();

    match (strategy, spec) {
        (ScanStrategy::Sequential, _) => minimum_location(spec.values(bound), pipeline),
        (ScanStrategy::Parallel, SeedSpec::Individual(seeds)) => seeds
            .par_iter()
            .map(|&seed| pipeline.evaluate(seed))
            .min(),
        (ScanStrategy::Parallel, SeedSpec::Ranges(ranges)) => ranges
            .par_iter()
            .flat_map(|range| range.values(bound).into_par_iter())
            .map(|seed| pipeline.evaluate(seed))
            .min(),
        // Individual seeds are single points, interval propagation gains nothing
        (ScanStrategy::Intervals, SeedSpec::Individual(seeds)) => {
            minimum_location(seeds.iter().copied(), pipeline)
        }
        (ScanStrategy::Intervals, SeedSpec::Ranges(ranges)) => minimum_location_of_intervals(
            ranges.iter().map(|range| range.interval(bound)).collect(),
            pipeline,
        ),
    }
}
