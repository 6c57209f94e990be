//! seedmap-almanac - Seed-to-location almanac evaluation
//!
//! This crate provides functionality to:
//! - Parse an almanac (seed list + chain of range-remapping tables)
//! - Map values through a pipeline of tables (first matching rule wins)
//! - Find the lowest reachable location for individual seeds and seed ranges

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use app::locator::{ScanStrategy, lowest_location, minimum_location};
pub use app::solver::{Answers, SolveError, SolveOptions, solve};
pub use domain::almanac::Almanac;
pub use domain::interval::Interval;
pub use domain::pipeline::{Pipeline, TraceStep};
pub use domain::rule::{Rule, RuleError};
pub use domain::seeds::{RangeBound, SeedRange, SeedSpec, SeedSpecError};
pub use domain::table::Table;
pub use infra::almanac_io::{AlmanacError, load_almanac, read_almanac};
pub use infra::almanac_parse::{ParseError, parse_almanac};
