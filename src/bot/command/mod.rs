//! Slash commands.
//!
//! Every command module exposes a `NAME`, a `register()` builder and a `run()` handler.
//! `run` returns `Result<(), AppError>`; `dispatch` turns any error into an ephemeral reply
//! through [`AppError::user_message`], so no failure is left unanswered.

pub mod admin;
pub mod duel;
pub mod history;
pub mod leaderboard;
pub mod points;
pub mod register;

use dioxus_logger::tracing;
use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, ResolvedOption, ResolvedValue, User,
};

use crate::{error::AppError, state::BotState};

/// Builders for every slash command, registered on `ready`.
pub fn all() -> Vec<CreateCommand> {
    vec![
        register::register(),
        points::register(),
        leaderboard::register(),
        duel::register(),
        admin::register(),
        history::register(),
    ]
}

/// Routes a slash command to its handler and replies with the error if it fails.
pub async fn dispatch(state: &BotState, ctx: &Context, command: &CommandInteraction) {
    let result = match command.data.name.as_str() {
        register::NAME => register::run(state, ctx, command).await,
        points::NAME => points::run(state, ctx, command).await,
        leaderboard::NAME => leaderboard::run(state, ctx, command).await,
        duel::NAME => duel::run(state, ctx, command).await,
        admin::NAME => admin::run(state, ctx, command).await,
        history::NAME => history::run(state, ctx, command).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            return;
        }
    };

    if let Err(e) = result {
        let response = ephemeral(e.user_message());
        if let Err(e) = command.create_response(&ctx.http, response).await {
            tracing::error!(
                "Failed to send error reply for /{}: {}",
                command.data.name,
                e
            );
        }
    }
}

/// Public reply to an interaction.
pub fn reply(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().content(content))
}

/// Reply only the invoking user can see.
pub fn ephemeral(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

pub fn user_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a User> {
    options
        .iter()
        .filter(|option| option.name == name)
        .find_map(|option| match option.value {
            ResolvedValue::User(user, _) => Some(user),
            _ => None,
        })
}

pub fn integer_option(options: &[ResolvedOption<'_>], name: &str) -> Option<i64> {
    options
        .iter()
        .filter(|option| option.name == name)
        .find_map(|option| match option.value {
            ResolvedValue::Integer(value) => Some(value),
            _ => None,
        })
}

pub fn string_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    options
        .iter()
        .filter(|option| option.name == name)
        .find_map(|option| match option.value {
            ResolvedValue::String(value) => Some(value),
            _ => None,
        })
}

/// Error for a required option Discord didn't send.
pub fn missing_option(name: &str) -> AppError {
    AppError::BadRequest(format!("Missing required option `{}`.", name))
}
