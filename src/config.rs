use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    /// Guild to register slash commands in. Commands are registered globally when unset.
    pub guild_id: Option<u64>,
    /// Channel where every new top-level message gets its own welcome thread.
    pub intro_channel_id: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            database_url: required("DATABASE_URL")?,
            guild_id: parse_optional_id("DISCORD_GUILD_ID", std::env::var("DISCORD_GUILD_ID").ok())?,
            intro_channel_id: parse_optional_id(
                "INTRO_CHANNEL_ID",
                std::env::var("INTRO_CHANNEL_ID").ok(),
            )?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Parses an optional Discord snowflake from an environment variable value.
///
/// An unset or blank value means the feature is disabled.
fn parse_optional_id(name: &str, value: Option<String>) -> Result<Option<u64>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    value
        .parse::<u64>()
        .map(Some)
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        })
}
