//! Almanac solver CLI
//!
//! Usage: seedmap_solve <INPUT> [--strategy <STRATEGY>] [--range-bound <BOUND>]
//!
//! Prints the lowest location for the seeds read one by one (part 1) and for
//! the seeds read as `(start, length)` ranges (part 2). `-` reads stdin.
//!
//! Example:
//!   seedmap_solve input.txt
//!   seedmap_solve input.txt --strategy parallel --range-bound inclusive

mod report;
mod telemetry;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use seedmap_almanac::app::solver::{solve_individual, solve_ranges};
use seedmap_almanac::{RangeBound, ScanStrategy, SeedSpecError, SolveError, SolveOptions};
use telemetry::LogArgs;

/// Scan strategy flag values
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
enum StrategyArg {
    /// Evaluate every seed on one thread
    Sequential,
    /// Evaluate every seed across all cores
    Parallel,
    /// Push whole seed ranges through the tables as intervals
    #[default]
    Intervals,
}

impl From<StrategyArg> for ScanStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Sequential => ScanStrategy::Sequential,
            StrategyArg::Parallel => ScanStrategy::Parallel,
            StrategyArg::Intervals => ScanStrategy::Intervals,
        }
    }
}

/// Range bound flag values
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
enum BoundArg {
    /// Exactly `length` seeds per range
    #[default]
    HalfOpen,
    /// `length + 1` seeds per range (start..=start+length)
    Inclusive,
}

impl From<BoundArg> for RangeBound {
    fn from(arg: BoundArg) -> Self {
        match arg {
            BoundArg::HalfOpen => RangeBound::HalfOpen,
            BoundArg::Inclusive => RangeBound::Inclusive,
        }
    }
}

/// Find the lowest location reachable from an almanac's seeds.
#[derive(Parser, Debug)]
#[command(name = "seedmap_solve", version)]
struct Cli {
    /// Almanac file (`-` reads stdin)
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    /// How the minimum location is searched for
    #[arg(long, value_enum, default_value_t = StrategyArg::Intervals)]
    strategy: StrategyArg,
    /// Upper bound convention for seed ranges
    #[arg(long, value_enum, default_value_t = BoundArg::HalfOpen)]
    range_bound: BoundArg,
    #[command(flatten)]
    log: LogArgs,
}

fn format_answer(answer: Option<i64>) -> String {
    match answer {
        Some(location) => location.to_string(),
        None => "none (no seeds)".to_string(),
    }
}

fn format_solve_error(err: &SolveError) -> String {
    match err {
        SolveError::Seeds(SeedSpecError::UnpairedSeed { count }) => format!(
            "Part 2 reads the seeds line as (start, length) pairs, but it holds {} number(s).\nAdd or remove a number so every range has a length.",
            count
        ),
        SolveError::Seeds(e) => format!("Invalid seed ranges for part 2: {}", e),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = telemetry::initialise(&cli.log) {
        eprintln!("Warning: {}", e);
    }

    let start = Instant::now();
    let almanac = report::load_input_or_exit(&cli.input);

    let options = SolveOptions::default()
        .with_strategy(cli.strategy.into())
        .with_range_bound(cli.range_bound.into());

    println!(
        "Loaded {} seed number(s) and {} table(s) from {}",
        almanac.seeds.len(),
        almanac.pipeline.len(),
        cli.input.display()
    );

    // Parts are solved separately so part 1 still prints when the seeds line
    // cannot be read as ranges.
    let part_one = solve_individual(&almanac, &options);
    println!("Answer for Part 1: {}", format_answer(part_one));

    match solve_ranges(&almanac, &options) {
        Ok(part_two) => println!("Answer for Part 2: {}", format_answer(part_two)),
        Err(e) => {
            eprintln!("Error: {}", format_solve_error(&e));
            std::process::exit(1);
        }
    }

    println!("Solved in {:.3} seconds.", start.elapsed().as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use crate::telemetry::LogFormat;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["seedmap_solve", "input.txt"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("input.txt"));
        assert_eq!(cli.strategy, StrategyArg::Intervals);
        assert_eq!(cli.range_bound, BoundArg::HalfOpen);
        assert_eq!(cli.log.log_filter, "warn");
        assert_eq!(cli.log.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "seedmap_solve",
            "-",
            "--strategy",
            "parallel",
            "--range-bound",
            "inclusive",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("-"));
        assert_eq!(ScanStrategy::from(cli.strategy), ScanStrategy::Parallel);
        assert_eq!(RangeBound::from(cli.range_bound), RangeBound::Inclusive);
        assert_eq!(cli.log.log_format, LogFormat::Json);
    }

    #[test]
    fn test_cli_rejects_unknown_strategy() {
        assert!(Cli::try_parse_from(["seedmap_solve", "in.txt", "--strategy", "magic"]).is_err());
    }

    #[test]
    fn test_format_answer() {
        assert_eq!(format_answer(Some(0)), "0");
        assert_eq!(format_answer(Some(46)), "46");
        assert_eq!(format_answer(None), "none (no seeds)");
    }

    #[test]
    fn test_format_unpaired_seeds() {
        let err = SolveError::Seeds(SeedSpecError::UnpairedSeed { count: 3 });
        assert!(format_solve_error(&err).contains("holds 3 number(s)"));
    }
}
