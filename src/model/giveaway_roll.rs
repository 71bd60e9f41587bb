//! Audit records of individual draw rolls.

/// One roll produced during a participation, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct GiveawayRoll {
    pub activity: String,
    pub discord_user_id: String,
    pub timestamp_micros: i64,
    pub sequence_index: i32,
    pub prize: String,
}

impl GiveawayRoll {
    pub fn from_entity(entity: entity::giveaway_roll::Model) -> Self {
        Self {
            activity: entity.activity,
            discord_user_id: entity.discord_user_id,
            timestamp_micros: entity.timestamp_micros,
            sequence_index: entity.sequence_index,
            prize: entity.prize,
        }
    }
}

/// Parameters for recording every roll of one participation.
#[derive(Debug, Clone)]
pub struct CreateGiveawayRollsParam {
    pub activity: String,
    pub discord_user_id: u64,
    pub timestamp_micros: i64,
    /// Prize ids in draw order; the position becomes the sequence index.
    pub prizes: Vec<String>,
}
