use serenity::all::{
    Colour, CommandInteraction, Context, CreateCommand, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

use crate::{
    error::AppError, model::player::Player, service::player::PlayerService, state::BotState,
};

pub const NAME: &str = "leaderboard";

/// Number of players shown on the leaderboard.
const LEADERBOARD_SIZE: u64 = 10;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Show the players with the most points")
}

pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let players = PlayerService::new(&state.db)
        .get_leaderboard(LEADERBOARD_SIZE)
        .await?;

    let embed = CreateEmbed::new()
        .title("Leaderboard")
        .description(format_leaderboard(&players))
        .colour(Colour::GOLD);

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().embed(embed)),
        )
        .await?;

    Ok(())
}

fn format_leaderboard(players: &[Player]) -> String {
    if players.is_empty() {
        return "No players registered yet.".to_string();
    }

    players
        .iter()
        .enumerate()
        .map(|(rank, player)| {
            format!(
                "{}. **{}** (<@{}>) - {} points",
                rank + 1,
                player.ign,
                player.discord_id,
                player.points
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
