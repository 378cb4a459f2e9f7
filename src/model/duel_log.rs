//! Duel analytics records.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A resolved duel as recorded for analytics.
#[derive(Debug, Clone, PartialEq)]
pub struct DuelLog {
    pub id: i32,
    pub challenger_id: u64,
    pub opponent_id: u64,
    pub wager: i64,
    pub winner_id: u64,
    pub loser_id: u64,
    pub winner_name: String,
    pub loser_name: String,
    pub created_at: DateTime<Utc>,
}

impl DuelLog {
    /// Converts an entity model to a duel log domain model at the repository boundary.
    pub fn from_entity(entity: entity::duel_log::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            challenger_id: parse_u64_from_string(entity.challenger_id)?,
            opponent_id: parse_u64_from_string(entity.opponent_id)?,
            wager: entity.wager,
            winner_id: parse_u64_from_string(entity.winner_id)?,
            loser_id: parse_u64_from_string(entity.loser_id)?,
            winner_name: entity.winner_name,
            loser_name: entity.loser_name,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for recording a resolved duel.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDuelLogParam {
    pub challenger_id: u64,
    pub opponent_id: u64,
    pub wager: i64,
    pub winner_id: u64,
    pub loser_id: u64,
    pub winner_name: String,
    pub loser_name: String,
}
