//! Rendering of duel prompts and their outcomes.
//!
//! A prompt is the `/duel` response: an embed addressed to the opponent plus accept and
//! decline buttons. Once the duel ends the prompt is edited in place to show the outcome
//! and its buttons are removed.

use serenity::all::{
    ButtonStyle, Colour, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter,
    EditInteractionResponse, EditMessage,
};

use crate::model::duel::{
    DuelAction, DuelChallenge, DuelId, DuelResolution, DUEL_RESPONSE_WINDOW_SECS,
};

/// Prefix of every duel button custom id.
const CUSTOM_ID_PREFIX: &str = "duel";

/// Builds the custom id of a duel button, e.g. `duel:accept:42`.
pub fn custom_id(action: DuelAction, id: DuelId) -> String {
    format!("{}:{}:{}", CUSTOM_ID_PREFIX, action.as_str(), id)
}

/// Parses a duel button custom id.
///
/// # Returns
/// - `Some((DuelAction, DuelId))` - A well-formed duel button id
/// - `None` - Not a duel button, or a malformed one
pub fn parse_custom_id(custom_id: &str) -> Option<(DuelAction, DuelId)> {
    let mut parts = custom_id.split(':');
    if parts.next()? != CUSTOM_ID_PREFIX {
        return None;
    }
    let action = DuelAction::parse(parts.next()?)?;
    let id = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    Some((action, id))
}

/// Whether a component custom id belongs to a duel prompt.
pub fn is_duel_component(custom_id: &str) -> bool {
    custom_id
        .split(':')
        .next()
        .is_some_and(|prefix| prefix == CUSTOM_ID_PREFIX)
}

pub fn challenge_embed(challenge: &DuelChallenge) -> CreateEmbed {
    CreateEmbed::new()
        .title("Duel challenge")
        .description(format!(
            "<@{}> challenges <@{}> to a duel for **{}** points!",
            challenge.challenger.discord_id,
            challenge.opponent.discord_id,
            challenge.wager()
        ))
        .field("Challenger", &challenge.challenger.ledger_key, true)
        .field("Opponent", &challenge.opponent.ledger_key, true)
        .field("Wager", challenge.wager().to_string(), true)
        .footer(CreateEmbedFooter::new(format!(
            "{} has {} seconds to respond.",
            challenge.opponent.ledger_key, DUEL_RESPONSE_WINDOW_SECS
        )))
        .colour(Colour::GOLD)
}

pub fn challenge_components(id: DuelId) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new(custom_id(DuelAction::Accept, id))
            .label("Accept")
            .style(ButtonStyle::Success),
        CreateButton::new(custom_id(DuelAction::Decline, id))
            .label("Decline")
            .style(ButtonStyle::Danger),
    ])]
}

/// Renders what a response did to a challenge.
///
/// # Returns
/// - `Some(CreateEmbed)` - The challenge ended and the prompt should show this
/// - `None` - The response changed nothing; leave the prompt alone
pub fn resolution_embed(
    challenge: &DuelChallenge,
    resolution: &DuelResolution,
) -> Option<CreateEmbed> {
    let embed = match resolution {
        DuelResolution::Ignored | DuelResolution::Unauthorized => return None,
        DuelResolution::Declined => CreateEmbed::new()
            .title("Duel declined")
            .description(format!(
                "<@{}> declined the duel from <@{}>.",
                challenge.opponent.discord_id, challenge.challenger.discord_id
            ))
            .colour(Colour::LIGHT_GREY),
        DuelResolution::Cancelled {
            underfunded,
            balance,
        } => {
            let party = challenge.participant(*underfunded);
            CreateEmbed::new()
                .title("Duel cancelled")
                .description(format!(
                    "<@{}> no longer has enough points. They have {}, the wager is {}.",
                    party.discord_id,
                    balance,
                    challenge.wager()
                ))
                .colour(Colour::RED)
        }
        DuelResolution::Resolved(outcome) => CreateEmbed::new()
            .title("Duel resolved")
            .description(format!(
                "<@{}> won **{}** points from <@{}>!",
                outcome.winner.discord_id, outcome.wager_transferred, outcome.loser.discord_id
            ))
            .field(
                &outcome.winner.ledger_key,
                format!("{} points", outcome.winner.balance),
                true,
            )
            .field(
                &outcome.loser.ledger_key,
                format!("{} points", outcome.loser.balance),
                true,
            )
            .colour(Colour::DARK_GREEN),
    };

    Some(embed)
}

pub fn expired_embed(challenge: &DuelChallenge) -> CreateEmbed {
    CreateEmbed::new()
        .title("Duel expired")
        .description(format!(
            "<@{}> didn't respond to <@{}> in time.",
            challenge.opponent.discord_id, challenge.challenger.discord_id
        ))
        .colour(Colour::LIGHT_GREY)
}

pub fn failure_embed(message: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Duel failed")
        .description(message)
        .colour(Colour::RED)
}

/// Edit that replaces a prompt with `embed` and removes its buttons.
pub fn closed_prompt(embed: CreateEmbed) -> EditInteractionResponse {
    EditInteractionResponse::new()
        .embeds(vec![embed])
        .components(Vec::new())
}

/// Same as [`closed_prompt`] for editing the prompt message directly, when the
/// interaction itself can no longer be answered.
pub fn closed_message(embed: CreateEmbed) -> EditMessage {
    EditMessage::new().embed(embed).components(Vec::new())
}
