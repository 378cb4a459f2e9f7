//! `/duel` command and the handling of its accept and decline buttons.

use dioxus_logger::tracing;
use rand::{rngs::StdRng, SeedableRng};
use serenity::all::{
    CommandInteraction, CommandOptionType, ComponentInteraction, Context, CreateCommand,
    CreateCommandOption, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::{
    bot::{
        command::{ephemeral, integer_option, missing_option, user_option},
        prompt,
    },
    error::{AppError, GENERIC_FAILURE},
    model::duel::{Duelist, ProposeDuelParam},
    service::duel::{registry::DuelClaim, DuelService},
    state::BotState,
};

pub const NAME: &str = "duel";

/// Private reply to a click on a prompt that no longer belongs to a pending challenge.
fn stale_button_reply() -> CreateInteractionResponse {
    ephemeral("This duel is no longer active.")
}

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Challenge another player to a duel for points")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "opponent", "Player to challenge")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "wager", "Points at stake")
                .required(true)
                .min_int_value(1),
        )
}

/// Proposes a duel and posts the prompt.
///
/// The challenge is registered before the prompt is posted so that a fast click always
/// finds it. If posting fails the challenge is discarded again.
pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let options = command.data.options();
    let opponent = user_option(&options, "opponent").ok_or_else(|| missing_option("opponent"))?;
    let wager = integer_option(&options, "wager").ok_or_else(|| missing_option("wager"))?;

    let id = state.duels.next_id();
    let challenge = DuelService::new(&state.db)
        .propose(
            id,
            ProposeDuelParam {
                challenger: Duelist {
                    discord_id: command.user.id.get(),
                    is_bot: command.user.bot,
                },
                opponent: Duelist {
                    discord_id: opponent.id.get(),
                    is_bot: opponent.bot,
                },
                wager,
            },
        )
        .await?;

    let message = CreateInteractionResponseMessage::new()
        .content(format!("<@{}>", challenge.opponent.discord_id))
        .embed(prompt::challenge_embed(&challenge))
        .components(prompt::challenge_components(id));

    let http = ctx.http.clone();
    let interaction = command.clone();
    state
        .duels
        .insert(challenge, move |challenge| async move {
            let edit = prompt::closed_prompt(prompt::expired_embed(&challenge));
            if let Err(e) = interaction.edit_response(&http, edit).await {
                tracing::error!("Failed to update prompt of expired duel {}: {}", challenge.id, e);
            }
        })
        .await;

    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        state.duels.discard(id).await;
        return Err(e.into());
    }

    Ok(())
}

/// Handles a click on a duel prompt button.
///
/// Only the opponent can claim the challenge; anyone else gets a private notice and the
/// challenge stays open. Once claimed, the response is resolved and the prompt is edited
/// to the outcome with its buttons removed. Any failure replaces the prompt with a generic
/// failure notice.
pub async fn handle_button(state: &BotState, ctx: &Context, component: &ComponentInteraction) {
    if let Err(e) = respond(state, ctx, component).await {
        tracing::error!(
            "Failed to handle duel button {}: {}",
            component.data.custom_id,
            e
        );
    }
}

async fn respond(
    state: &BotState,
    ctx: &Context,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let Some((action, id)) = prompt::parse_custom_id(&component.data.custom_id) else {
        tracing::warn!("Malformed duel button id {}", component.data.custom_id);
        component
            .create_response(&ctx.http, stale_button_reply())
            .await?;
        return Ok(());
    };
    let responder = component.user.id.get();

    let mut challenge = match state.duels.claim(id, responder).await {
        DuelClaim::Claimed(challenge) => challenge,
        DuelClaim::Unauthorized { opponent_id } => {
            component
                .create_response(
                    &ctx.http,
                    ephemeral(format!("Only <@{}> can respond to this duel.", opponent_id)),
                )
                .await?;
            return Ok(());
        }
        DuelClaim::Gone => {
            component
                .create_response(&ctx.http, stale_button_reply())
                .await?;
            return Ok(());
        }
    };

    if let Err(e) = component
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await
    {
        // The challenge already left the registry; close its prompt so no one clicks it again
        tracing::error!("Lost duel {} after failing to acknowledge its button", id);
        let close = prompt::closed_message(prompt::failure_embed(GENERIC_FAILURE));
        if let Err(e) = component
            .message
            .channel_id
            .edit_message(&ctx.http, component.message.id, close)
            .await
        {
            tracing::error!("Failed to close prompt of lost duel {}: {}", id, e);
        }
        return Err(e.into());
    }

    let mut rng = StdRng::from_os_rng();
    let edit = match DuelService::new(&state.db)
        .respond(&mut challenge, responder, action, &mut rng)
        .await
    {
        Ok(resolution) => match prompt::resolution_embed(&challenge, &resolution) {
            Some(embed) => prompt::closed_prompt(embed),
            None => return Ok(()),
        },
        Err(e) => prompt::closed_prompt(prompt::failure_embed(&e.user_message())),
    };

    component.edit_response(&ctx.http, edit).await?;

    Ok(())
}
