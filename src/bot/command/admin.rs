use dioxus_logger::tracing;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions,
};

use crate::{
    bot::command::{ephemeral, integer_option, missing_option, user_option},
    error::AppError,
    model::player::AdjustPointsParam,
    service::player::{PlayerService, MAX_ADJUSTMENT},
    state::BotState,
};

pub const NAME: &str = "addpoints";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Grant or deduct points from a player")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "Player to adjust")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "amount",
                "Points to add, negative to deduct",
            )
            .required(true)
            .max_int_value(MAX_ADJUSTMENT as u64),
        )
}

pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let can_manage = command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.manage_guild());
    if !can_manage {
        return Err(AppError::BadRequest(
            "You need the Manage Server permission to adjust points.".to_string(),
        ));
    }

    let options = command.data.options();
    let target = user_option(&options, "user").ok_or_else(|| missing_option("user"))?;
    let amount = integer_option(&options, "amount").ok_or_else(|| missing_option("amount"))?;

    let balance = PlayerService::new(&state.db)
        .adjust_points(AdjustPointsParam {
            discord_id: target.id.get(),
            delta: amount,
        })
        .await?;

    tracing::info!(
        "{} adjusted points of {} by {}, new balance {}",
        command.user.name,
        target.id,
        amount,
        balance
    );

    command
        .create_response(
            &ctx.http,
            ephemeral(format!(
                "Adjusted <@{}> by {} points. New balance: **{}**.",
                target.id, amount, balance
            )),
        )
        .await?;

    Ok(())
}
