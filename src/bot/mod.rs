//! Discord bot integration for the clan's point economy.
//!
//! This module wires the serenity gateway client to the service layer. Slash commands
//! live in `command`, gateway events in `handler`, and everything that renders a duel
//! prompt or its outcome in `prompt`.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability events
//! - `GUILD_MESSAGES` - Receive messages for intro threads
//! - `GUILD_MEMBERS` - Receive nickname changes to keep display names in sync (privileged intent)
//! - `MESSAGE_CONTENT` - Read message content in the intro channel (privileged intent)
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer Portal for
//! the bot application.

pub mod command;
pub mod handler;
pub mod prompt;
pub mod start;
