//! Weighted outcome resolver ("drop table").
//!
//! A drop table is an ordered list of `(weight, entry)` pairs whose weights total 1. Rolling
//! draws `r` in `[0, 1)` and walks the list, subtracting each weight from `r` until the
//! remainder falls inside an entry's half-open bucket `[lower, lower + weight)`. An entry
//! may itself be a table, which is rolled again with a fresh draw from the same source.
//!
//! Tables are validated once at construction and immutable afterwards, so a single table
//! can be shared across concurrent rolls.

use std::fmt;

use crate::{error::config::ConfigError, service::random::RandomSource};

/// Tolerance allowed between the sum of a table's weights and 1.
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

/// An entry of a drop table: either an outcome or a nested table.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry<T> {
    Leaf(T),
    Nested(DropTable<T>),
}

/// A validated discrete probability distribution over outcomes, possibly nested.
#[derive(Debug, Clone, PartialEq)]
pub struct DropTable<T> {
    entries: Vec<(f64, Entry<T>)>,
}

impl<T> DropTable<T> {
    /// Builds a table after validating its weights.
    ///
    /// Nested tables are validated by their own construction.
    ///
    /// # Returns
    /// - `Ok(DropTable)` - Every weight is positive and the weights total 1
    /// - `Err(ConfigError::EmptyDropTable)` - No entries were supplied
    /// - `Err(ConfigError::InvalidWeight)` - A weight is zero, negative, or not finite
    /// - `Err(ConfigError::WeightsDoNotTotalOne)` - The weights sum to something other than 1
    pub fn new(entries: Vec<(f64, Entry<T>)>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyDropTable);
        }

        let mut total = 0.0;
        for (index, (weight, _)) in entries.iter().enumerate() {
            if !weight.is_finite() || *weight <= 0.0 {
                return Err(ConfigError::InvalidWeight {
                    index,
                    weight: *weight,
                });
            }
            total += weight;
        }

        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ConfigError::WeightsDoNotTotalOne { total });
        }

        Ok(Self { entries })
    }

    /// Builds a table of leaf outcomes only.
    pub fn from_outcomes(outcomes: Vec<(f64, T)>) -> Result<Self, ConfigError> {
        Self::new(
            outcomes
                .into_iter()
                .map(|(weight, outcome)| (weight, Entry::Leaf(outcome)))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[(f64, Entry<T>)] {
        &self.entries
    }

    /// Rolls the table once.
    ///
    /// # Panics
    /// Panics if no entry is selected, which only happens if the random source returns a
    /// value outside `[0, 1)`.
    pub fn roll(&self, rng: &dyn RandomSource) -> &T {
        let mut remainder = rng.next_unit();

        for (weight, entry) in &self.entries {
            if remainder < *weight {
                return Self::resolve(entry, rng);
            }
            remainder -= weight;
        }

        // Weights may total slightly less than 1, leaving a sliver past the last bucket.
        match self.entries.last() {
            Some((_, entry)) if remainder < WEIGHT_TOLERANCE => Self::resolve(entry, rng),
            _ => panic!("drop table failed to select an outcome (remainder {remainder})"),
        }
    }

    fn resolve<'a>(entry: &'a Entry<T>, rng: &dyn RandomSource) -> &'a T {
        match entry {
            Entry::Leaf(outcome) => outcome,
            Entry::Nested(table) => table.roll(rng),
        }
    }

    /// Returns every leaf outcome reachable from this table, depth first.
    pub fn leaves(&self) -> Vec<&T> {
        let mut leaves = Vec::new();
        for (_, entry) in &self.entries {
            match entry {
                Entry::Leaf(outcome) => leaves.push(outcome),
                Entry::Nested(table) => leaves.extend(table.leaves()),
            }
        }
        leaves
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result
    where
        T: fmt::Display,
    {
        let indent = "  ".repeat(depth);
        for (weight, entry) in &self.entries {
            match entry {
                Entry::Leaf(outcome) => writeln!(f, "{indent}{weight:.4} {outcome}")?,
                Entry::Nested(table) => {
                    writeln!(f, "{indent}{weight:.4} [")?;
                    table.fmt_indented(f, depth + 1)?;
                    writeln!(f, "{indent}]")?;
                }
            }
        }
        Ok(())
    }
}

/// Renders the table as an indented tree of weights and outcomes, one entry per line.
impl<T: fmt::Display> fmt::Display for DropTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::random::ScriptedRandom;

    fn example_table() -> DropTable<&'static str> {
        let nested =
            DropTable::from_outcomes(vec![(0.25, "d1"), (0.25, "d2"), (0.25, "d3"), (0.25, "d4")])
                .unwrap();

        DropTable::new(vec![
            (0.5, Entry::Leaf("a")),
            (0.25, Entry::Leaf("b")),
            (0.125, Entry::Leaf("c")),
            (0.125, Entry::Nested(nested)),
        ])
        .unwrap()
    }

    fn roll_with(table: &DropTable<&'static str>, values: &[f64]) -> &'static str {
        let rng = ScriptedRandom::new(values.iter().copied());
        let outcome = *table.roll(&rng);
        assert_eq!(rng.remaining(), 0, "every scripted value should be consumed");
        outcome
    }

    #[test]
    fn rolls_are_determined_by_the_random_sequence() {
        let table = example_table();

        assert_eq!(roll_with(&table, &[0.3]), "a");
        assert_eq!(roll_with(&table, &[0.6]), "b");
        assert_eq!(roll_with(&table, &[0.8]), "c");
        assert_eq!(roll_with(&table, &[0.9, 0.1]), "d1");
        assert_eq!(roll_with(&table, &[0.9, 0.3]), "d2");
        assert_eq!(roll_with(&table, &[0.9, 0.6]), "d3");
        assert_eq!(roll_with(&table, &[0.9, 0.9]), "d4");
    }

    #[test]
    fn bucket_boundaries_belong_to_the_next_entry() {
        let table = example_table();

        assert_eq!(roll_with(&table, &[0.0]), "a");
        assert_eq!(roll_with(&table, &[0.5]), "b");
        assert_eq!(roll_with(&table, &[0.75]), "c");
        assert_eq!(roll_with(&table, &[0.875, 0.0]), "d1");
        assert_eq!(roll_with(&table, &[0.875, 0.25]), "d2");
    }

    #[test]
    fn nested_tables_redraw_instead_of_rescaling() {
        let table = example_table();

        // The leftover of 0.99 would select d4 if rescaled; the fresh draw selects d1.
        assert_eq!(roll_with(&table, &[0.99, 0.01]), "d1");
    }

    #[test]
    fn rolls_just_below_one_select_the_last_entry() {
        let table = example_table();

        assert_eq!(roll_with(&table, &[0.999_999_999, 0.999_999_999]), "d4");
    }

    #[test]
    fn tolerates_rounding_in_the_weight_total() {
        let table = DropTable::from_outcomes(vec![(0.1, "x"), (0.2, "y"), (0.7, "z")]).unwrap();

        assert_eq!(roll_with(&table, &[0.999_999_999_9]), "z");
    }

    #[test]
    #[should_panic(expected = "failed to select an outcome")]
    fn panics_when_source_leaves_the_unit_interval() {
        let table = DropTable::from_outcomes(vec![(1.0, "only")]).unwrap();

        table.roll(&ScriptedRandom::new([1.5]));
    }

    #[test]
    fn rejects_empty_tables() {
        let result = DropTable::<&str>::new(vec![]);

        assert!(matches!(result, Err(ConfigError::EmptyDropTable)));
    }

    #[test]
    fn rejects_non_positive_weights() {
        let zero = DropTable::from_outcomes(vec![(0.0, "a"), (1.0, "b")]);
        let negative = DropTable::from_outcomes(vec![(-0.5, "a"), (1.5, "b")]);
        let nan = DropTable::from_outcomes(vec![(f64::NAN, "a"), (1.0, "b")]);

        assert!(matches!(
            zero,
            Err(ConfigError::InvalidWeight { index: 0, .. })
        ));
        assert!(matches!(
            negative,
            Err(ConfigError::InvalidWeight { index: 0, .. })
        ));
        assert!(matches!(nan, Err(ConfigError::InvalidWeight { index: 0, .. })));
    }

    #[test]
    fn rejects_weights_not_totalling_one() {
        let short = DropTable::from_outcomes(vec![(0.5, "a"), (0.25, "b")]);
        let long = DropTable::from_outcomes(vec![(0.5, "a"), (0.5 + 1e-6, "b")]);

        assert!(matches!(
            short,
            Err(ConfigError::WeightsDoNotTotalOne { .. })
        ));
        assert!(matches!(long, Err(ConfigError::WeightsDoNotTotalOne { .. })));
    }

    #[test]
    fn accepts_totals_within_tolerance() {
        assert!(DropTable::from_outcomes(vec![(0.5, "a"), (0.5 + 1e-10, "b")]).is_ok());
    }

    #[test]
    fn lists_leaves_depth_first() {
        let table = example_table();

        assert_eq!(
            table.leaves(),
            vec![&"a", &"b", &"c", &"d1", &"d2", &"d3", &"d4"]
        );
    }

    #[test]
    fn displays_as_indented_tree() {
        let nested = DropTable::from_outcomes(vec![(0.5, "x"), (0.5, "y")]).unwrap();
        let table = DropTable::new(vec![
            (0.75, Entry::Leaf("none")),
            (0.25, Entry::Nested(nested)),
        ])
        .unwrap();

        assert_eq!(
            table.to_string(),
            "0.7500 none\n0.2500 [\n  0.5000 x\n  0.5000 y\n]\n"
        );
    }

    #[test]
    fn string_outcomes_are_supported() {
        let table =
            DropTable::from_outcomes(vec![(0.6, "no power".to_string()), (0.4, "abuse".to_string())])
                .unwrap();

        let rng = ScriptedRandom::new([0.7]);
        assert_eq!(table.roll(&rng), "abuse");
    }
}
