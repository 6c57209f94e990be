//! Almanac text parser
//!
//! Input layout:
//!
//! ```text
//! seeds: 79 14 55 13
//!
//! seed-to-soil map:
//! 50 98 2
//! 52 50 48
//!
//! soil-to-fertilizer map:
//! ...
//! ```
//!
//! The first non-blank line carries the seeds. Each table starts at a line
//! containing `map:` and runs until a blank line or end of input. Rule lines
//! are `<dest_start> <source_start> <length>`. Other lines are ignored.

use crate::constants::{MAP_HEADER_MARKER, RULE_FIELD_COUNT, SEEDS_PREFIX};
use crate::domain::almanac::Almanac;
use crate::domain::pipeline::Pipeline;
use crate::domain::rule::{Rule, RuleError};
use crate::domain::table::Table;
use tracing::{debug, trace, warn};

/// Almanac parse errors
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input does not start with a `seeds:` line
    #[error("missing `seeds:` line at the start of the input")]
    MissingSeedsLine,
    /// Token is not a valid integer
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },
    /// Rule line does not hold exactly three numbers
    #[error("line {line}: expected 3 numbers (dest_start source_start length), found {found}")]
    RuleArity { line: usize, found: usize },
    /// Rule numbers are out of range
    #[error("line {line}: {source}")]
    InvalidRule {
        line: usize,
        #[source]
        source: RuleError,
    },
}

/// Table being collected while its rule lines are read
struct TableBuilder {
    name: String,
    rules: Vec<Rule>,
}

impl TableBuilder {
    fn finish(self) -> Table {
        debug!(table = %self.name, rules = self.rules.len(), "parsed table");
        Table::new(self.name, self.rules)
    }
}

/// Parse almanac text
pub fn parse_almanac(input: &str) -> Result<Almanac, ParseError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line));

    let (seeds_line, seeds_text) = lines
        .by_ref()
        .find(|(_, line)| !line.trim().is_empty())
        .ok_or(ParseError::MissingSeedsLine)?;
    let seeds_text = seeds_text
        .trim()
        .strip_prefix(SEEDS_PREFIX)
        .ok_or(ParseError::MissingSeedsLine)?;
    let seeds = parse_numbers(seeds_text, seeds_line)?;

    let mut tables = Vec::new();
    let mut current: Option<TableBuilder> = None;

    for (number, line) in lines {
        let line = line.trim();

        if line.is_empty() {
            if let Some(builder) = current.take() {
                tables.push(builder.finish());
            }
            continue;
        }

        if let Some((name, _)) = line.split_once(MAP_HEADER_MARKER) {
            if let Some(builder) = current.take() {
                tables.push(builder.finish());
            }
            current = Some(TableBuilder {
                name: name.trim().to_string(),
                rules: Vec::new(),
            });
            continue;
        }

        match current.as_mut() {
            Some(builder) => builder.rules.push(parse_rule(line, number)?),
            None => trace!(line = number, "ignoring line outside a table"),
        }
    }

    if let Some(builder) = current.take() {
        tables.push(builder.finish());
    }

    let pipeline = Pipeline::new(tables);
    for gap in pipeline.category_gaps() {
        warn!(
            table = gap.index,
            produces = gap.produces,
            expects = gap.expects,
            "adjacent tables do not chain by category"
        );
    }

    debug!(seeds = seeds.len(), tables = pipeline.len(), "parsed almanac");
    Ok(Almanac::new(seeds, pipeline))
}

/// Parse whitespace separated integers
fn parse_numbers(text: &str, line: usize) -> Result<Vec<i64>, ParseError> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
                line,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parse a `<dest_start> <source_start> <length>` line
fn parse_rule(text: &str, line: usize) -> Result<Rule, ParseError> {
    let fields = parse_numbers(text, line)?;
    if fields.len() != RULE_FIELD_COUNT {
        return Err(ParseError::RuleArity {
            line,
            found: fields.len(),
        });
    }
    let (dest_start, source_start, length) = (fields[0], fields[1], fields[2]);

    Rule::new(source_start, dest_start, length)
        .map_err(|source| ParseError::InvalidRule { line, source })
}
