//! Table operations implementation
//!
//! A table is one named stage of the pipeline (e.g. `seed-to-soil`). Lookups
//! scan the rules in order and the first rule covering a value wins; values no
//! rule covers map to themselves.

use crate::constants::CATEGORY_SEPARATOR;
use crate::domain::interval::Interval;
use crate::domain::rule::Rule;

/// Named, ordered collection of remapping rules
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    name: String,
    rules: Vec<Rule>,
}

impl Table {
    /// Create a new table
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Source and destination category, for names shaped like `seed-to-soil`
    pub fn categories(&self) -> Option<(&str, &str)> {
        let (source, destination) = self.name.split_once(CATEGORY_SEPARATOR)?;
        if source.is_empty() || destination.is_empty() {
            return None;
        }
        Some((source, destination))
    }

    /// Map a single value (first matching rule wins, identity otherwise)
    pub fn map_value(&self, value: i64) -> i64 {
        self.rules
            .iter()
            .find_map(|rule| rule.try_map(value))
            .unwrap_or(value)
    }

    /// Map every value of `interval`, appending the image pieces to `out`
    ///
    /// The interval is cut at rule boundaries. A piece claimed by a rule is
    /// shifted and is no longer offered to later rules, which reproduces the
    /// first-match-wins order of [`Table::map_value`]. Whatever no rule claims
    /// passes through unchanged.
    pub fn map_interval(&self, interval: Interval, out: &mut Vec<Interval>) {
        if interval.is_empty() {
            return;
        }

        let mut pending = vec![interval];
        for rule in &self.rules {
            let source = rule.source();
            let mut unclaimed = Vec::with_capacity(pending.len());

            for piece in pending.drain(..) {
                let split = piece.split(&source);
                if let Some(inside) = split.inside {
                    out.push(inside.shift(rule.offset()));
                }
                unclaimed.extend(split.before);
                unclaimed.extend(split.after);
            }

            pending = unclaimed;
            if pending.is_empty() {
                return;
            }
        }

        out.extend(pending);
    }

    /// Map a set of intervals
    pub fn map_intervals(&self, intervals: &[Interval]) -> Vec<Interval> {
        let mut out = Vec::with_capacity(intervals.len());
        for &interval in intervals {
            self.map_interval(interval, &mut out);
        }
        out
    }
}
