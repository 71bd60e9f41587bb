//! Per-process read cache of last-participation timestamps.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::model::participation::ParticipationKey;

/// Shadows participation records so repeated rejections do not hit the database.
///
/// Entries are filled on read misses and removed whenever the key is written. Entries never
/// expire on their own; the participation store is only written through this process.
#[derive(Clone, Default)]
pub struct ParticipationCache {
    entries: Arc<RwLock<HashMap<ParticipationKey, i64>>>,
}

impl ParticipationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &ParticipationKey) -> Option<i64> {
        let hit = self.entries.read().await.get(key).copied();
        if hit.is_some() {
            tracing::debug!(
                "Participation cache hit for {} / {}",
                key.activity,
                key.discord_user_id
            );
        }
        hit
    }

    pub async fn insert(&self, key: ParticipationKey, last_participation_micros: i64) {
        self.entries
            .write()
            .await
            .insert(key, last_participation_micros);
    }

    /// Drops the cached entry for a key that is about to be, or was just, written.
    pub async fn invalidate(&self, key: &ParticipationKey) {
        if self.entries.write().await.remove(key).is_some() {
            tracing::debug!(
                "Invalidated participation cache for {} / {}",
                key.activity,
                key.discord_user_id
            );
        }
    }
}
