use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};

use crate::{
    bot::command::{missing_option, reply, string_option},
    error::AppError,
    model::player::RegisterPlayerParam,
    service::player::{PlayerService, MAX_IGN_LENGTH},
    state::BotState,
};

pub const NAME: &str = "register";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Link your in-game name to your Discord account")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "ign", "Your in-game name")
                .required(true)
                .max_length(MAX_IGN_LENGTH as u16),
        )
}

pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let options = command.data.options();
    let ign = string_option(&options, "ign").ok_or_else(|| missing_option("ign"))?;

    let display_name = command
        .member
        .as_ref()
        .map(|member| member.display_name().to_string())
        .unwrap_or_else(|| command.user.display_name().to_string());

    let player = PlayerService::new(&state.db)
        .register(RegisterPlayerParam {
            discord_id: command.user.id.get(),
            ign: ign.to_string(),
            display_name,
        })
        .await?;

    command
        .create_response(
            &ctx.http,
            reply(format!(
                "<@{}> is now registered as **{}**. You start with {} points.",
                player.discord_id, player.ign, player.points
            )),
        )
        .await?;

    Ok(())
}
