//! Shared helper utilities for factory methods.

use std::sync::atomic::{AtomicU64, Ordering};

/// First generated Discord ID; well above the small literal IDs tests pick by hand.
const FIRST_GENERATED_DISCORD_ID: u64 = 100_000_000_000_000_000;

static NEXT_DISCORD_ID: AtomicU64 = AtomicU64::new(FIRST_GENERATED_DISCORD_ID);

/// Returns a Discord ID no other factory call in this process has returned.
pub fn next_discord_id() -> u64 {
    NEXT_DISCORD_ID.fetch_add(1, Ordering::Relaxed)
}
