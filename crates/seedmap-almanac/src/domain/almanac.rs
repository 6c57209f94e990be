//! Parsed almanac: seed numbers plus the table pipeline

use crate::domain::pipeline::Pipeline;
use crate::domain::seeds::{SeedSpec, SeedSpecError};

/// Parsed puzzle input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Almanac {
    /// Numbers from the `seeds:` line, in input order
    pub seeds: Vec<i64>,
    /// Tables in input order
    pub pipeline: Pipeline,
}

impl Almanac {
    /// Create a new almanac
    pub fn new(seeds: Vec<i64>, pipeline: Pipeline) -> Self {
        Self { seeds, pipeline }
    }

    /// Seeds read one by one
    pub fn individual_seeds(&self) -> SeedSpec {
        SeedSpec::individual(&self.seeds)
    }

    /// Seeds read as `(start, length)` pairs
    pub fn seed_ranges(&self) -> Result<SeedSpec, SeedSpecError> {
        SeedSpec::ranges(&self.seeds)
    }
}
