//! Validated monthly draw definitions and result rendering.

use std::collections::HashMap;

use crate::{
    error::{config::ConfigError, internal::InternalError},
    model::draw::{DrawSpec, OutcomeSpec, WeightedEntrySpec},
    service::{
        drop_table::{DropTable, Entry},
        participation::eligibility::datetime_from_micros,
        random::RandomSource,
    },
};

/// Text shown for a roll that won nothing.
pub const NO_PRIZE_DESCRIPTION: &str = "Sorry, better luck next time.";

/// A monthly draw ready to roll: its prize table plus everything needed to describe results.
#[derive(Debug, Clone)]
pub struct DrawDefinition {
    activity: String,
    title: String,
    rolls: usize,
    no_prize: String,
    consolation_emojis: Vec<String>,
    /// Prize ids in catalog order.
    prize_order: Vec<String>,
    descriptions: HashMap<String, String>,
    table: DropTable<String>,
}

/// Builds a drop table of prize ids from its serialized form.
pub fn table_from_spec(entries: &[WeightedEntrySpec]) -> Result<DropTable<String>, ConfigError> {
    let entries = entries
        .iter()
        .map(|entry| {
            let outcome = match &entry.outcome {
                OutcomeSpec::Prize(id) => Entry::Leaf(id.clone()),
                OutcomeSpec::Table(nested) => Entry::Nested(table_from_spec(nested)?),
            };
            Ok((entry.weight, outcome))
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;

    DropTable::new(entries)
}

impl DrawDefinition {
    /// Validates a draw description.
    ///
    /// Table outcomes missing from the prize catalog are logged as warnings and later render
    /// as a no-prize line.
    ///
    /// # Returns
    /// - `Ok(DrawDefinition)` - The draw is usable
    /// - `Err(ConfigError::InvalidDraw)` - The draw has no rolls or an empty title
    /// - `Err(ConfigError)` - The prize table has invalid weights
    pub fn from_spec(spec: DrawSpec) -> Result<Self, ConfigError> {
        if spec.rolls == 0 {
            return Err(ConfigError::InvalidDraw {
                activity: spec.activity,
                reason: "rolls must be at least 1".to_string(),
            });
        }
        if spec.title.trim().is_empty() {
            return Err(ConfigError::InvalidDraw {
                activity: spec.activity,
                reason: "title must not be empty".to_string(),
            });
        }

        let table = table_from_spec(&spec.table)?;

        let prize_order: Vec<String> = spec.prizes.iter().map(|prize| prize.id.clone()).collect();
        let descriptions: HashMap<String, String> = spec
            .prizes
            .into_iter()
            .map(|prize| (prize.id, prize.description))
            .collect();

        for outcome in table.leaves() {
            if *outcome != spec.no_prize && !descriptions.contains_key(outcome) {
                tracing::warn!(
                    "Draw {} can roll prize '{}' which has no description",
                    spec.activity,
                    outcome
                );
            }
        }

        Ok(Self {
            activity: spec.activity,
            title: spec.title,
            rolls: spec.rolls,
            no_prize: spec.no_prize,
            consolation_emojis: spec.consolation_emojis,
            prize_order,
            descriptions,
            table,
        })
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rolls(&self) -> usize {
        self.rolls
    }

    pub fn no_prize(&self) -> &str {
        &self.no_prize
    }

    pub fn table(&self) -> &DropTable<String> {
        &self.table
    }

    /// Rolls the prize table once per configured roll.
    pub fn roll_all(&self, rng: &dyn RandomSource) -> Vec<String> {
        (0..self.rolls)
            .map(|_| self.table.roll(rng).clone())
            .collect()
    }

    /// Every prize id worth previewing: the no-prize outcome, then the catalog in order.
    pub fn all_prizes(&self) -> Vec<String> {
        std::iter::once(self.no_prize.clone())
            .chain(
                self.prize_order
                    .iter()
                    .filter(|id| **id != self.no_prize)
                    .cloned(),
            )
            .collect()
    }

    /// User-facing text for a single prize id.
    ///
    /// Unknown ids are logged and described as a no-prize roll, so rendering never fails.
    pub fn describe(&self, prize: &str) -> &str {
        if prize == self.no_prize {
            return NO_PRIZE_DESCRIPTION;
        }

        match self.descriptions.get(prize) {
            Some(description) => description,
            None => {
                tracing::error!("Unexpected prize '{}' in draw {}", prize, self.activity);
                NO_PRIZE_DESCRIPTION
            }
        }
    }

    /// Renders rolls as numbered lines, each followed by a blank line.
    ///
    /// When every roll is a no-prize and the draw has consolation emojis, a random one is
    /// appended to the last line.
    pub fn render_prizes(&self, prizes: &[String], rng: &dyn RandomSource) -> String {
        let won_anything = prizes.iter().any(|prize| *prize != self.no_prize);
        let mut text = String::new();

        for (index, prize) in prizes.iter().enumerate() {
            text.push_str(&format!("**Roll #{}**: {}", index + 1, self.describe(prize)));

            let is_last = index + 1 == prizes.len();
            if is_last && !won_anything && !self.consolation_emojis.is_empty() {
                let emoji = &self.consolation_emojis[rng.next_index(self.consolation_emojis.len())];
                text.push(' ');
                text.push_str(emoji);
            }

            text.push_str("\n\n");
        }

        text
    }

    /// The line announcing a participation, e.g. "<@1> is participating in the giveaway for
    /// October 2026!".
    pub fn render_header(&self, mention: &str, now_micros: i64) -> Result<String, InternalError> {
        let month = datetime_from_micros(now_micros)?.format("%B %Y");

        Ok(format!(
            "{mention} is participating in the {} for {month}!\n\n",
            self.title
        ))
    }
}
