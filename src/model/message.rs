//! Transport-independent view of an inbound chat message.

use crate::model::command::Author;

/// An inbound message as the dispatcher sees it.
///
/// The bot layer builds this from a serenity `Message` so dispatching can be exercised
/// without a gateway connection.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub message_id: u64,
    pub author: Author,
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    pub content: String,
    /// Receive time in microseconds since the Unix epoch.
    pub timestamp_micros: i64,
}
