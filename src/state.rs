use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, GuildId};

use crate::{config::Config, service::duel::registry::DuelRegistry};

/// Shared state handed to every Discord event.
#[derive(Clone)]
pub struct BotState {
    pub db: DatabaseConnection,
    pub duels: DuelRegistry,
    pub guild_id: Option<GuildId>,
    pub intro_channel_id: Option<ChannelId>,
}

impl BotState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            duels: DuelRegistry::new(),
            guild_id: config.guild_id.map(GuildId::new),
            intro_channel_id: config.intro_channel_id.map(ChannelId::new),
        }
    }
}
