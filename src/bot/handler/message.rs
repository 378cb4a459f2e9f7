use dioxus_logger::tracing;
use serenity::all::{AutoArchiveDuration, Context, CreateThread, Message};

use crate::state::BotState;

/// Longest thread name Discord accepts.
const MAX_THREAD_NAME_LENGTH: usize = 100;

/// Handles messages posted in the intro channel by opening a welcome thread on each.
///
/// Only top-level messages from humans in the configured intro channel get a thread;
/// everything else, including all messages when no intro channel is set, is ignored.
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    let Some(intro_channel_id) = state.intro_channel_id else {
        return;
    };
    if message.channel_id != intro_channel_id || message.author.bot || message.guild_id.is_none()
    {
        return;
    }

    let name = intro_thread_name(message.author.display_name());
    let builder = CreateThread::new(name).auto_archive_duration(AutoArchiveDuration::OneWeek);

    match message
        .channel_id
        .create_thread_from_message(&ctx.http, message.id, builder)
        .await
    {
        Ok(thread) => tracing::info!(
            "Opened intro thread {} for {}",
            thread.id,
            message.author.name
        ),
        Err(e) => tracing::error!(
            "Failed to open intro thread for message {}: {:?}",
            message.id,
            e
        ),
    }
}

/// Thread name for an intro post, cut to Discord's limit on a character boundary.
fn intro_thread_name(author: &str) -> String {
    let name = author.trim();
    let name = if name.is_empty() { "New member" } else { name };

    name.chars().take(MAX_THREAD_NAME_LENGTH).collect()
}
