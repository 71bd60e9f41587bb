use chrono::Utc;
use serenity::all::{Context, Mentionable, Message};

use crate::{
    model::{command::Author, message::InboundMessage},
    service::dispatch::Dispatcher,
};

/// Handle message creation in a channel
pub async fn handle_message(dispatcher: &Dispatcher, ctx: Context, message: Message) {
    // Never respond to ourselves
    if message.author.id == ctx.cache.current_user().id {
        return;
    }

    let inbound = to_inbound(&ctx, &message);

    let Some(reply) = dispatcher.dispatch(&inbound).await else {
        return;
    };

    if let Err(e) = message.channel_id.say(&ctx.http, reply).await {
        tracing::error!(
            "Failed to reply to message {} in channel {}: {}",
            message.id,
            message.channel_id,
            e
        );
    }
}

/// Converts a gateway message into the dispatcher's view of it.
///
/// Role names are resolved from the cached guild; roles missing from the cache are skipped.
fn to_inbound(ctx: &Context, message: &Message) -> InboundMessage {
    let role_names = match (message.guild(&ctx.cache), message.member.as_ref()) {
        (Some(guild), Some(member)) => member
            .roles
            .iter()
            .filter_map(|role_id| guild.roles.get(role_id).map(|role| role.name.clone()))
            .collect(),
        _ => Vec::new(),
    };

    InboundMessage {
        message_id: message.id.get(),
        author: Author {
            id: message.author.id.get(),
            name: message.author.name.clone(),
            mention: message.author.mention().to_string(),
            role_names,
        },
        guild_id: message.guild_id.map(|id| id.get()),
        channel_id: message.channel_id.get(),
        content: message.content.clone(),
        timestamp_micros: Utc::now().timestamp_micros(),
    }
}
