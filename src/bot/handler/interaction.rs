use dioxus_logger::tracing;
use serenity::all::{Context, Interaction};

use crate::{
    bot::{command, prompt},
    state::BotState,
};

/// Routes slash commands and duel prompt buttons.
///
/// Other interaction kinds and components of unknown prompts are ignored.
pub async fn handle_interaction_create(state: &BotState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => {
            tracing::debug!("/{} used by {}", command.data.name, command.user.name);
            command::dispatch(state, &ctx, &command).await;
        }
        Interaction::Component(component) if prompt::is_duel_component(&component.data.custom_id) => {
            command::duel::handle_button(state, &ctx, &component).await;
        }
        _ => {}
    }
}
