//! Error types and user-facing failure rendering.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves as
//! the top-level error type that wraps domain-specific errors. Nothing escapes the command
//! and interaction boundary as an unhandled fault: every error is turned into a reply via
//! `AppError::user_message`, which shows validation failures verbatim and logs everything
//! else before replacing it with a generic failure notice.

pub mod config;
pub mod duel;
pub mod internal;
pub mod ledger;

use dioxus_logger::tracing;
use thiserror::Error;

use crate::error::{config::ConfigError, duel::DuelError, internal::InternalError, ledger::LedgerError};

/// Message shown to users when an operation fails for a reason they cannot act on.
pub const GENERIC_FAILURE: &str = "Something went wrong while processing that. Please try again later.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Duel precondition failure or illegal state transition.
    ///
    /// Validation variants are shown to the user as-is; transition errors are internal.
    #[error(transparent)]
    DuelErr(#[from] DuelError),

    /// Point ledger failure.
    #[error(transparent)]
    LedgerErr(#[from] LedgerError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Failed to install the global tracing subscriber.
    #[error(transparent)]
    LoggerErr(#[from] tracing::subscriber::SetGlobalDefaultError),

    /// Unexpected internal state, usually corrupt stored data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Requested resource does not exist. The message is shown to the user.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. The message is shown to the user.
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the text shown to the Discord user.
    ///
    /// Maps each error variant to a reply:
    /// - `BadRequest` / `NotFound` → their message
    /// - Duel validation errors → their message
    /// - Ledger `InsufficientFunds` → its message. A missing ledger account only shows up
    ///   when a player vanished mid-operation and is treated as a backend failure
    /// - Everything else → logged at error level, rendered as [`GENERIC_FAILURE`]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
            Self::DuelErr(err) if err.is_validation() => err.to_string(),
            Self::LedgerErr(err @ LedgerError::InsufficientFunds { .. }) => err.to_string(),
            err => {
                tracing::error!("{}", err);
                GENERIC_FAILURE.to_string()
            }
        }
    }
}
