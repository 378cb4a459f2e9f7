use serenity::all::{
    Colour, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::{
    bot::command::user_option, error::AppError, model::duel_log::DuelLog,
    service::player::PlayerService, state::BotState,
};

pub const NAME: &str = "duelhistory";

const HISTORY_SIZE: u64 = 5;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Show a player's most recent duels")
        .add_option(CreateCommandOption::new(
            CommandOptionType::User,
            "user",
            "Player to look up, defaults to you",
        ))
}

pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let options = command.data.options();
    let target = user_option(&options, "user").unwrap_or(&command.user);

    let logs = PlayerService::new(&state.db)
        .get_duel_history(target.id.get(), HISTORY_SIZE)
        .await?;

    let embed = CreateEmbed::new()
        .title(format!("Recent duels of {}", target.display_name()))
        .description(format_history(target.id.get(), &logs))
        .colour(Colour::BLUE);

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().embed(embed)),
        )
        .await?;

    Ok(())
}

fn format_history(discord_id: u64, logs: &[DuelLog]) -> String {
    if logs.is_empty() {
        return "No duels yet.".to_string();
    }

    logs.iter()
        .map(|log| {
            let verdict = if log.winner_id == discord_id {
                "Won"
            } else {
                "Lost"
            };
            format!(
                "<t:{}:R> {} {} points: **{}** beat **{}**",
                log.created_at.timestamp(),
                verdict,
                log.wager,
                log.winner_name,
                log.loser_name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
