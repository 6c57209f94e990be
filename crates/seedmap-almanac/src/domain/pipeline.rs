//! Pipeline evaluation
//!
//! A pipeline is the ordered chain of tables a seed passes through on its way
//! to a location. Each table's output is the next table's input.

use crate::domain::interval::{Interval, merge_intervals};
use crate::domain::table::Table;

/// Ordered chain of tables
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pipeline {
    tables: Vec<Table>,
}

/// One step of a traced evaluation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceStep<'a> {
    /// Name of the table that produced `value`
    pub table: &'a str,
    /// Value after the table was applied
    pub value: i64,
}

/// Two adjacent tables whose categories do not line up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryGap<'a> {
    /// Index of the first table of the pair
    pub index: usize,
    /// Destination category of the first table
    pub produces: &'a str,
    /// Source category of the second table
    pub expects: &'a str,
}

impl Pipeline {
    /// Create a new pipeline
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Thread `seed` through every table in order
    #[inline]
    pub fn evaluate(&self, seed: i64) -> i64 {
        self.tables
            .iter()
            .fold(seed, |value, table| table.map_value(value))
    }

    /// Evaluate `seed`, recording the value after each table
    pub fn trace(&self, seed: i64) -> Vec<TraceStep<'_>> {
        let mut value = seed;
        self.tables
            .iter()
            .map(|table| {
                value = table.map_value(value);
                TraceStep {
                    table: table.name(),
                    value,
                }
            })
            .collect()
    }

    /// Push whole intervals through every table
    ///
    /// Pieces are merged after each table to keep the working set small. The
    /// returned intervals are sorted, disjoint and non-empty.
    pub fn evaluate_intervals(&self, intervals: Vec<Interval>) -> Vec<Interval> {
        self.tables
            .iter()
            .fold(merge_intervals(intervals), |current, table| {
                merge_intervals(table.map_intervals(&current))
            })
    }

    /// Adjacent tables where one's destination is not the next one's source
    ///
    /// Tables without an `X-to-Y` name are skipped.
    pub fn category_gaps(&self) -> Vec<CategoryGap<'_>> {
        self.tables
            .windows(2)
            .enumerate()
            .filter_map(|(index, pair)| {
                let (_, produces) = pair[0].categories()?;
                let (expects, _) = pair[1].categories()?;
                (produces != expects).then_some(CategoryGap {
                    index,
                    produces,
                    expects,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rule::Rule;

    fn rule(dest: i64, source: i64, length: i64) -> Rule {
        Rule::new(source, dest, length).unwrap()
    }

    fn sample_pipeline() -> Pipeline {
        Pipeline::new(vec![
            Table::new("seed-to-soil", vec![rule(50, 98, 2), rule(52, 50, 48)]),
            Table::new(
                "soil-to-fertilizer",
                vec![rule(0, 15, 37), rule(37, 52, 2), rule(39, 0, 15)],
            ),
        ])
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = Pipeline::default();
        for seed in [-10, 0, 79, i64::MAX] {
            assert_eq!(pipeline.evaluate(seed), seed);
        }
    }

    #[test]
    fn test_evaluate_chains_tables() {
        let pipeline = sample_pipeline();
        // 79 -> 81 (seed-to-soil) -> 81 (soil-to-fertilizer)
        assert_eq!(pipeline.evaluate(79), 81);
        // 14 -> 14 -> 53
        assert_eq!(pipeline.evaluate(14), 53);
        // 55 -> 57 -> 57
        assert_eq!(pipeline.evaluate(55), 57);
        // 13 -> 13 -> 52
        assert_eq!(pipeline.evaluate(13), 52);
    }

    #[test]
    fn test_trace_records_every_table() {
        let pipeline = sample_pipeline();
        let steps = pipeline.trace(14);
        assert_eq!(
            steps,
            vec![
                TraceStep {
                    table: "seed-to-soil",
                    value: 14
                },
                TraceStep {
                    table: "soil-to-fertilizer",
                    value: 53
                },
            ]
        );
        assert_eq!(steps.last().map(|s| s.value), Some(pipeline.evaluate(14)));
    }

    #[test]
    fn test_evaluate_intervals_covers_every_value() {
        let pipeline = sample_pipeline();
        let image = pipeline.evaluate_intervals(vec![Interval::new(0, 110)]);

        let mut expected: Vec<i64> = (0..110).map(|v| pipeline.evaluate(v)).collect();
        expected.sort_unstable();
        expected.dedup();

        let actual: Vec<i64> = image.iter().flat_map(|i| i.values()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_category_gaps() {
        assert!(sample_pipeline().category_gaps().is_empty());

        let broken = Pipeline::new(vec![
            Table::new("seed-to-soil", Vec::new()),
            Table::new("water-to-light", Vec::new()),
        ]);
        assert_eq!(
            broken.category_gaps(),
            vec![CategoryGap {
                index: 0,
                produces: "soil",
                expects: "water"
            }]
        );
    }
}
