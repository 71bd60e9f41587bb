//! Monthly participation service.
//!
//! Runs the read-check-roll-write sequence for a monthly draw. For each (activity, user) the
//! sequence holds a per-key lock and executes inside one database transaction, so two
//! concurrent requests from the same user cannot both pass the eligibility check and no roll
//! is reported without being durably recorded.

pub mod cache;
pub mod eligibility;
pub mod lock;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        discord_user::DiscordUserRepository, giveaway_roll::GiveawayRollRepository,
        participation::ParticipationRepository,
    },
    error::AppError,
    model::{
        discord_user::UpsertDiscordUserParam,
        giveaway_roll::CreateGiveawayRollsParam,
        participation::{ParticipationKey, UpsertParticipationParam},
    },
    service::participation::{
        cache::ParticipationCache,
        eligibility::Eligibility,
        lock::ParticipationLocks,
    },
};

/// A request to participate in a monthly activity.
#[derive(Debug, Clone)]
pub struct ParticipationRequest {
    pub key: ParticipationKey,
    /// Current username of the participant, stored alongside the record.
    pub user_name: String,
    /// Time of the request, microseconds since the Unix epoch.
    pub now_micros: i64,
    pub is_admin: bool,
    pub force: bool,
}

/// What happened to a participation request.
#[derive(Debug, Clone, PartialEq)]
pub enum ParticipationOutcome {
    /// The user was eligible (or forced); `prizes` holds the recorded rolls in draw order.
    Participated {
        eligibility: Eligibility,
        prizes: Vec<String>,
    },
    /// The user already participated this month. Nothing was written.
    Rejected { last_participation_micros: i64 },
}

/// Service coordinating eligibility, rolling, and persistence of participations.
///
/// Clones share the same cache and locks, so one instance can back several draws.
#[derive(Clone)]
pub struct ParticipationService {
    db: DatabaseConnection,
    cache: ParticipationCache,
    locks: ParticipationLocks,
}

impl ParticipationService {
    /// Creates a new ParticipationService with an empty cache.
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            cache: ParticipationCache::new(),
            locks: ParticipationLocks::new(),
        }
    }

    /// Gets the last participation time for a key, consulting the cache first.
    ///
    /// # Returns
    /// - `Ok(Some(micros))` - Time of the last successful participation
    /// - `Ok(None)` - The user never participated in the activity
    /// - `Err(AppError::DbErr)` - Database error on a cache miss
    pub async fn last_participation(&self, key: &ParticipationKey) -> Result<Option<i64>, AppError> {
        self.lookup(&self.db, key).await
    }

    async fn lookup<C: sea_orm::ConnectionTrait>(
        &self,
        db: &C,
        key: &ParticipationKey,
    ) -> Result<Option<i64>, AppError> {
        if let Some(micros) = self.cache.get(key).await {
            return Ok(Some(micros));
        }

        let record = ParticipationRepository::new(db).get(key).await?;
        if let Some(record) = &record {
            self.cache
                .insert(key.clone(), record.last_participation_micros)
                .await;
        }

        Ok(record.map(|record| record.last_participation_micros))
    }

    /// Checks eligibility and, if allowed, rolls and records a participation.
    ///
    /// `roll` is only invoked once the request has passed the eligibility check, and its
    /// prize ids are stored as the audit rows of this participation. The user row, the
    /// participation record, and the audit rows commit together or not at all.
    ///
    /// # Arguments
    /// - `request` - Who is participating in what, and when
    /// - `roll` - Produces the prize ids for an accepted participation
    ///
    /// # Returns
    /// - `Ok(ParticipationOutcome::Participated)` - Rolls were recorded
    /// - `Ok(ParticipationOutcome::Rejected)` - Already participated this month; nothing written
    /// - `Err(AppError)` - Database failure or unrepresentable timestamp; nothing written
    pub async fn participate<F>(
        &self,
        request: ParticipationRequest,
        roll: F,
    ) -> Result<ParticipationOutcome, AppError>
    where
        F: FnOnce() -> Vec<String>,
    {
        let key = request.key;
        let _guard = self.locks.acquire(&key).await;

        let txn = self.db.begin().await?;

        let last = self.lookup(&txn, &key).await?;
        let eligibility =
            eligibility::check(last, request.now_micros, request.is_admin, request.force)?;

        if let Eligibility::Ineligible {
            last_participation_micros,
        } = eligibility
        {
            txn.rollback().await?;

            tracing::info!(
                "User {} already participated in {} this month",
                key.discord_user_id,
                key.activity
            );

            return Ok(ParticipationOutcome::Rejected {
                last_participation_micros,
            });
        }

        let prizes = roll();

        self.cache.invalidate(&key).await;

        DiscordUserRepository::new(&txn)
            .upsert(UpsertDiscordUserParam {
                discord_id: key.discord_user_id,
                name: request.user_name,
            })
            .await?;
        ParticipationRepository::new(&txn)
            .upsert(UpsertParticipationParam {
                key: key.clone(),
                last_participation_micros: request.now_micros,
            })
            .await?;
        GiveawayRollRepository::new(&txn)
            .create_many(CreateGiveawayRollsParam {
                activity: key.activity.clone(),
                discord_user_id: key.discord_user_id,
                timestamp_micros: request.now_micros,
                prizes: prizes.clone(),
            })
            .await?;

        txn.commit().await?;

        self.cache.invalidate(&key).await;

        tracing::info!(
            "User {} participated in {} ({:?})",
            key.discord_user_id,
            key.activity,
            eligibility
        );

        Ok(ParticipationOutcome::Participated {
            eligibility,
            prizes,
        })
    }
}

#[cfg(test)]
mod test;
