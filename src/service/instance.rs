//! Identity of the running bot process.
//!
//! Several instances (e.g. dev and prod, or an old and a new deployment) may share a Discord
//! channel. Each instance reports its identity to `!admin list-instances` so an administrator
//! can stop one of them with `!admin kill <id>`.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::config::BotEnv;

const INSTANCE_ID_LENGTH: usize = 32;

/// Details of this process as reported to administrators.
#[derive(Debug, Clone)]
pub struct InstanceInfo {
    pub env: BotEnv,
    pub id: String,
    pub hostname: String,
    pub start_time: DateTime<Utc>,
}

impl InstanceInfo {
    /// Captures the identity of the current process with a fresh random ID.
    pub fn current(env: BotEnv) -> Self {
        Self {
            env,
            id: generate_instance_id(),
            hostname: hostname(),
            start_time: Utc::now(),
        }
    }

    /// Multi-line summary shown by `!admin list-instances`.
    pub fn describe(&self) -> String {
        format!(
            "Advice Bot instance details:\nEnv: `{}`\nID: `{}`\nHostname: `{}`\nStart time: `{}`",
            self.env,
            self.id,
            self.hostname,
            self.start_time.format("%Y-%m-%d %H:%M:%S%.6f%:z")
        )
    }
}

/// Generates a random lowercase hexadecimal identifier.
fn generate_instance_id() -> String {
    const CHARSET: &[u8] = b"0123456789abcdef";

    let mut rng = rand::rng();

    (0..INSTANCE_ID_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

fn hostname() -> String {
    if let Ok(hostname) = std::env::var("HOSTNAME") {
        if !hostname.trim().is_empty() {
            return hostname.trim().to_string();
        }
    }

    std::fs::read_to_string("/etc/hostname")
        .ok()
        .map(|hostname| hostname.trim().to_string())
        .filter(|hostname| !hostname.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
