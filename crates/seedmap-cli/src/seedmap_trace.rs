//! Seed trace CLI
//!
//! Usage: seedmap_trace <INPUT> <SEED>...
//!
//! Prints the value of each seed after every table of the almanac.
//!
//! Example:
//!   seedmap_trace input.txt 79 14
//!   seed 79 -> seed-to-soil 81 -> soil-to-fertilizer 81 -> ... -> humidity-to-location 82

mod report;
mod telemetry;

use std::path::PathBuf;

use clap::Parser;
use seedmap_almanac::TraceStep;
use telemetry::LogArgs;

/// Show how seeds move through an almanac's tables.
#[derive(Parser, Debug)]
#[command(name = "seedmap_trace", version)]
struct Cli {
    /// Almanac file (`-` reads stdin)
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    /// Seeds to trace
    #[arg(value_name = "SEED", required = true, allow_negative_numbers = true)]
    seeds: Vec<i64>,
    #[command(flatten)]
    log: LogArgs,
}

fn format_trace(seed: i64, steps: &[TraceStep<'_>]) -> String {
    let mut line = format!("seed {}", seed);
    for step in steps {
        line.push_str(&format!(" -> {} {}", step.table, step.value));
    }
    line
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = telemetry::initialise(&cli.log) {
        eprintln!("Warning: {}", e);
    }

    let almanac = report::load_input_or_exit(&cli.input);
    if almanac.pipeline.is_empty() {
        eprintln!("Warning: the almanac has no tables; every seed maps to itself.");
    }

    for &seed in &cli.seeds {
        let steps = almanac.pipeline.trace(seed);
        println!("{}", format_trace(seed, &steps));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_negative_seed() {
        let cli = Cli::try_parse_from(["seedmap_trace", "input.txt", "79", "-3"]).unwrap();
        assert_eq!(cli.seeds, vec![79, -3]);
    }

    #[test]
    fn test_cli_requires_seed() {
        assert!(Cli::try_parse_from(["seedmap_trace", "input.txt"]).is_err());
    }

    #[test]
    fn test_format_trace() {
        let steps = [
            TraceStep {
                table: "seed-to-soil",
                value: 81,
            },
            TraceStep {
                table: "soil-to-fertilizer",
                value: 81,
            },
        ];
        assert_eq!(
            format_trace(79, &steps),
            "seed 79 -> seed-to-soil 81 -> soil-to-fertilizer 81"
        );
        assert_eq!(format_trace(5, &[]), "seed 5");
    }
}
