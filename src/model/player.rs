//! Player domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{error::AppError, model::duel::Participant, util::parse::parse_u64_from_string};

/// Registered clan member with a ledger-backed point balance.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Discord ID of the player.
    pub discord_id: u64,
    /// In-game name. Doubles as the ledger account key.
    pub ign: String,
    /// Last known guild display name.
    pub display_name: String,
    /// Current point balance.
    pub points: i64,
    pub created_at: DateTime<Utc>,
}

impl Player {
    /// Converts an entity model to a player domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Player)` - The converted player
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored Discord ID is not a valid u64
    pub fn from_entity(entity: entity::player::Model) -> Result<Self, AppError> {
        let discord_id = parse_u64_from_string(entity.discord_id)?;

        Ok(Self {
            discord_id,
            ign: entity.ign,
            display_name: entity.display_name,
            points: entity.points,
            created_at: entity.created_at,
        })
    }

    /// Point-in-time view of this player as a duel participant.
    pub fn into_participant(self) -> Participant {
        Participant {
            discord_id: self.discord_id,
            ledger_key: self.ign,
            balance: self.points,
        }
    }
}

/// Parameters for registering a new player.
#[derive(Debug, Clone)]
pub struct RegisterPlayerParam {
    pub discord_id: u64,
    /// Requested in-game name, validated and trimmed by the service.
    pub ign: String,
    pub display_name: String,
}

/// Parameters for an admin point adjustment.
#[derive(Debug, Clone)]
pub struct AdjustPointsParam {
    /// Discord ID of the player whose balance changes.
    pub discord_id: u64,
    /// Signed number of points to add.
    pub delta: i64,
}
