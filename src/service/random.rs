//! Injectable sources of uniform random values.
//!
//! Everything random in the bot (prize rolls, flavor text, dice) draws from a
//! `RandomSource` handed in by the caller, so tests can script exact sequences. Production
//! uses the operating system CSPRNG: prize outcomes must not be predictable from
//! observing earlier draws.

use rand::{rngs::OsRng, Rng, TryRngCore};

/// A source of uniform random values in `[0, 1)`.
pub trait RandomSource: Send + Sync {
    /// Returns the next value, uniformly distributed in `[0, 1)`.
    fn next_unit(&self) -> f64;

    /// Returns a uniformly chosen index in `0..len`.
    ///
    /// `len` must be non-zero.
    fn next_index(&self, len: usize) -> usize {
        let index = (self.next_unit() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }

    /// Returns a uniformly chosen integer in `min..=max`.
    fn next_in_range(&self, min: u64, max: u64) -> u64 {
        let span = (max - min) as f64 + 1.0;
        let offset = (self.next_unit() * span) as u64;
        min + offset.min(max - min)
    }
}

/// Random source backed by the operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandomSource;

impl RandomSource for OsRandomSource {
    fn next_unit(&self) -> f64 {
        OsRng.unwrap_err().random::<f64>()
    }

    fn next_in_range(&self, min: u64, max: u64) -> u64 {
        OsRng.unwrap_err().random_range(min..=max)
    }
}

/// Random source replaying a fixed sequence of values, for deterministic tests.
///
/// Panics when the script runs out so tests notice unexpected extra draws.
#[cfg(test)]
pub struct ScriptedRandom {
    values: std::sync::Mutex<std::collections::VecDeque<f64>>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: std::sync::Mutex::new(values.into_iter().collect()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.lock().unwrap().len()
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_unit(&self) -> f64 {
        self.values
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted random values exhausted")
    }
}
