//! Ready event handler for bot initialization.
//!
//! The ready event fires once per gateway connection after the initial handshake. It is
//! used to log the connection, set the bot's activity and register the slash commands,
//! scoped to a single guild when one is configured so changes show up immediately.

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Command, Context, Ready};

use crate::{bot::command, state::BotState};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared bot state holding the optional command guild
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("Settling scores with /duel")));

    let result = match state.guild_id {
        Some(guild_id) => guild_id.set_commands(&ctx.http, command::all()).await,
        None => Command::set_global_commands(&ctx.http, command::all()).await,
    };

    match result {
        Ok(commands) => tracing::info!(
            "Registered {} slash commands {}",
            commands.len(),
            match state.guild_id {
                Some(guild_id) => format!("in guild {}", guild_id),
                None => "globally".to_string(),
            }
        ),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
