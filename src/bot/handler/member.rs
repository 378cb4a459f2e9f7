use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildMemberUpdateEvent, Member};

use crate::service::player::PlayerService;

/// Handles the guild_member_update event when a member is updated in a guild (roles, nickname, etc.)
///
/// Keeps the stored display name of registered players in sync with their guild nickname.
/// Members who never registered are ignored.
pub async fn handle_guild_member_update(
    db: &DatabaseConnection,
    _ctx: Context,
    _old: Option<Member>,
    new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    if event.user.bot {
        return;
    }

    let discord_id = event.user.id.get();
    let display_name = match &new {
        Some(member) => member.display_name().to_string(),
        None => event
            .nick
            .clone()
            .unwrap_or_else(|| event.user.display_name().to_string()),
    };

    match PlayerService::new(db)
        .sync_display_name(discord_id, &display_name)
        .await
    {
        Ok(true) => tracing::debug!(
            "Synced display name of {} to {}",
            discord_id,
            display_name
        ),
        Ok(false) => {}
        Err(e) => tracing::error!(
            "Failed to sync display name for user {}: {:?}",
            discord_id,
            e
        ),
    }
}
