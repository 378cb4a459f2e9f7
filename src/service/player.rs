//! Player service for registration, balances and admin point adjustments.

use sea_orm::DatabaseConnection;

use crate::{
    data::{duel_log::DuelLogRepository, player::PlayerRepository},
    error::AppError,
    model::{
        duel_log::DuelLog,
        player::{AdjustPointsParam, Player, RegisterPlayerParam},
    },
    service::ledger::LedgerService,
};

/// Longest in-game name accepted at registration.
pub const MAX_IGN_LENGTH: usize = 32;

/// Largest number of points a single admin adjustment can add or deduct.
pub const MAX_ADJUSTMENT: i64 = 1_000_000_000;

/// Service providing business logic for player management.
pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a Discord user under an in-game name with a zero balance.
    ///
    /// The in-game name is trimmed before validation.
    ///
    /// # Returns
    /// - `Ok(Player)` - The registered player
    /// - `Err(AppError::BadRequest)` - Empty or overlong name, caller already registered,
    ///   or name already taken
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: RegisterPlayerParam) -> Result<Player, AppError> {
        let ign = param.ign.trim().to_string();
        if ign.is_empty() {
            return Err(AppError::BadRequest(
                "Your in-game name can't be empty.".to_string(),
            ));
        }
        if ign.chars().count() > MAX_IGN_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Your in-game name can be at most {} characters.",
                MAX_IGN_LENGTH
            )));
        }

        let repo = PlayerRepository::new(self.db);

        if let Some(existing) = repo.find_by_discord_id(param.discord_id).await? {
            return Err(AppError::BadRequest(format!(
                "You are already registered as **{}**.",
                existing.ign
            )));
        }
        if repo.find_by_ign(&ign).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "**{}** is already registered to another player.",
                ign
            )));
        }

        repo.create(RegisterPlayerParam { ign, ..param }).await
    }

    pub async fn get_player(&self, discord_id: u64) -> Result<Option<Player>, AppError> {
        PlayerRepository::new(self.db)
            .find_by_discord_id(discord_id)
            .await
    }

    pub async fn get_leaderboard(&self, limit: u64) -> Result<Vec<Player>, AppError> {
        PlayerRepository::new(self.db).get_leaderboard(limit).await
    }

    /// Applies an admin point adjustment to a registered player.
    ///
    /// # Returns
    /// - `Ok(i64)` - Balance after the adjustment
    /// - `Err(AppError::BadRequest)` - Zero delta, or one larger than [`MAX_ADJUSTMENT`]
    /// - `Err(AppError::NotFound)` - Target is not registered
    /// - `Err(AppError::LedgerErr(InsufficientFunds))` - Deduction exceeds the balance
    pub async fn adjust_points(&self, param: AdjustPointsParam) -> Result<i64, AppError> {
        if param.delta == 0 {
            return Err(AppError::BadRequest("Amount must not be zero.".to_string()));
        }
        if !(-MAX_ADJUSTMENT..=MAX_ADJUSTMENT).contains(&param.delta) {
            return Err(AppError::BadRequest(format!(
                "Amount must be between -{} and {}.",
                MAX_ADJUSTMENT, MAX_ADJUSTMENT
            )));
        }

        let player = self
            .get_player(param.discord_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("<@{}> is not registered.", param.discord_id))
            })?;

        let balance = LedgerService::new(self.db)
            .apply_delta(&player.ign, param.delta)
            .await?;

        Ok(balance)
    }

    /// Stores a new guild display name for a player if they are registered.
    ///
    /// # Returns
    /// - `Ok(true)` - Registered player updated
    /// - `Ok(false)` - Not a registered player, nothing changed
    pub async fn sync_display_name(
        &self,
        discord_id: u64,
        display_name: &str,
    ) -> Result<bool, AppError> {
        let updated = PlayerRepository::new(self.db)
            .update_display_name(discord_id, display_name)
            .await?;

        Ok(updated)
    }

    /// Gets a player's most recent duels, newest first.
    pub async fn get_duel_history(
        &self,
        discord_id: u64,
        limit: u64,
    ) -> Result<Vec<DuelLog>, AppError> {
        DuelLogRepository::new(self.db)
            .get_recent_for_player(discord_id, limit)
            .await
    }
}
