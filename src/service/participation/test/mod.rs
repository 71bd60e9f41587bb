use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::{giveaway_roll::GiveawayRollRepository, participation::ParticipationRepository},
    error::AppError,
    model::participation::ParticipationKey,
    service::participation::{
        eligibility::Eligibility, ParticipationOutcome, ParticipationRequest,
        ParticipationService,
    },
};


const ACTIVITY: &str = "monthly_giveaway";
const USER_ID: u64 = 4242;

fn micros(year: i32, month: u32, day: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .unwrap()
        .timestamp_micros()
}

fn request(now_micros: i64) -> ParticipationRequest {
    ParticipationRequest {
        key: ParticipationKey::new(ACTIVITY, USER_ID),
        user_name: "Participant".to_string(),
        now_micros,
        is_admin: false,
        force: false,
    }
}

fn four_rolls() -> Vec<String> {
    vec![
        "no_prize".to_string(),
        "gp_2m".to_string(),
        "no_prize".to_string(),
        "no_prize".to_string(),
    ]
}
