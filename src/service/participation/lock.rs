//! Per-key async locks serializing participation attempts.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::model::participation::ParticipationKey;

/// One async mutex per (activity, user).
///
/// Holding the guard for a key makes the read-check-roll-write sequence for that user a
/// critical section while other users proceed concurrently.
#[derive(Clone, Default)]
pub struct ParticipationLocks {
    locks: Arc<Mutex<HashMap<ParticipationKey, Arc<Mutex<()>>>>>,
}

impl ParticipationLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for and takes the lock for `key`.
    pub async fn acquire(&self, key: &ParticipationKey) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks
                .entry(key.clone())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        lock.lock_owned().await
    }
}
