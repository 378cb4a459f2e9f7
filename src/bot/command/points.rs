use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::{
    bot::command::{reply, user_option},
    error::AppError,
    service::player::PlayerService,
    state::BotState,
};

pub const NAME: &str = "points";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Show a player's point balance")
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

    let player = PlayerService::new(&state.db)
        .get_player(target.id.get())
        .await?
        .ok_or_else(|| {
            if target.id == command.user.id {
                AppError::NotFound(
                    "You are not registered. Use /register to link your in-game name first."
                        .to_string(),
                )
            } else {
                AppError::NotFound(format!("<@{}> is not registered.", target.id))
            }
        })?;

    command
        .create_response(
            &ctx.http,
            reply(format!(
                "**{}** (<@{}>) has **{}** points.",
                player.ign, player.discord_id, player.points
            )),
        )
        .await?;

    Ok(())
}
