//! Shared request builders for command tests.

use crate::{
    model::command::{Author, CommandRequest},
    util::args::split,
};


pub const AUTHOR_ID: u64 = 42;
pub const GUILD_ID: u64 = 100;
pub const CHANNEL_ID: u64 = 200;

/// Default request time: 2026-10-17 12:00:00 UTC.
pub const NOW_MICROS: i64 = 1_792_238_400_000_000;

pub fn author() -> Author {
    Author {
        id: AUTHOR_ID,
        name: "Participant".to_string(),
        mention: format!("<@{AUTHOR_ID}>"),
        role_names: Vec::new(),
    }
}

pub fn request_at(content: &str, timestamp_micros: i64, is_admin: bool) -> CommandRequest {
    CommandRequest {
        message_id: 1,
        author: author(),
        guild_id: Some(GUILD_ID),
        channel_id: CHANNEL_ID,
        content: content.to_string(),
        timestamp_micros,
        argv: split(content).unwrap(),
        is_admin,
    }
}

pub fn request(content: &str) -> CommandRequest {
    request_at(content, NOW_MICROS, false)
}

pub fn admin_request(content: &str) -> CommandRequest {
    request_at(content, NOW_MICROS, true)
}
