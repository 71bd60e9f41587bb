//! Domain models for last-participation records.

/// Identifies one user's participation in one monthly activity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipationKey {
    /// Activity identifier, e.g. `monthly_giveaway`.
    pub activity: String,
    /// Discord user ID of the participant.
    pub discord_user_id: u64,
}

impl ParticipationKey {
    pub fn new(activity: impl Into<String>, discord_user_id: u64) -> Self {
        Self {
            activity: activity.into(),
            discord_user_id,
        }
    }
}

/// The fact "user U last successfully participated in activity A at time T".
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipationRecord {
    pub key: ParticipationKey,
    /// Time of the last successful participation, microseconds since the Unix epoch.
    pub last_participation_micros: i64,
}

impl ParticipationRecord {
    /// Converts an entity model to a participation record at the repository boundary.
    ///
    /// The caller supplies the key it queried with, so the stored user id string does not
    /// need to be parsed back.
    pub fn from_entity(key: ParticipationKey, entity: entity::participation::Model) -> Self {
        Self {
            key,
            last_participation_micros: entity.last_participation_micros,
        }
    }
}

/// Parameters for recording a successful participation.
///
/// Overwrites any previous record for the same key.
#[derive(Debug, Clone)]
pub struct UpsertParticipationParam {
    pub key: ParticipationKey,
    pub last_participation_micros: i64,
}
