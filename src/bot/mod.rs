//! Discord gateway integration.
//!
//! The bot receives guild messages, hands them to the dispatcher, and posts the reply in
//! the same channel. It holds no state of its own; everything it knows about commands
//! comes from the dispatcher built at startup.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Populate the cache with guilds and their roles
//! - `GUILD_MESSAGES` - Receive message events in guild channels
//! - `MESSAGE_CONTENT` - Read message text (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled in the
//! Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
