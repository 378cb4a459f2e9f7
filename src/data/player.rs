//! Player data repository for database operations.
//!
//! This module provides the `PlayerRepository` for managing registered players and their
//! point balances. It is the storage behind the point ledger: balance reads and signed
//! deltas go through here. The repository is generic over the SeaORM connection so the
//! ledger can run several operations inside one transaction.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::{
    error::AppError,
    model::player::{Player, RegisterPlayerParam},
};

/// Repository providing database operations for players.
pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new PlayerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new player with a zero balance.
    ///
    /// Does not check for an existing registration; a duplicate Discord ID or in-game
    /// name fails with a unique constraint error.
    ///
    /// # Returns
    /// - `Ok(Player)` - The created player
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: RegisterPlayerParam) -> Result<Player, AppError> {
        let now = Utc::now();
        let entity = entity::prelude::Player::insert(entity::player::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            ign: ActiveValue::Set(param.ign),
            display_name: ActiveValue::Set(param.display_name),
            points: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(self.db)
        .await?;

        Player::from_entity(entity)
    }

    /// Finds a player by their Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - Player found
    /// - `Ok(None)` - No player registered for that Discord ID
    /// - `Err(AppError)` - Database error or corrupt stored ID
    pub async fn find_by_discord_id(&self, discord_id: u64) -> Result<Option<Player>, AppError> {
        let entity = entity::prelude::Player::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?;

        entity.map(Player::from_entity).transpose()
    }

    /// Finds a player by in-game name (the ledger key).
    pub async fn find_by_ign(&self, ign: &str) -> Result<Option<Player>, AppError> {
        let entity = entity::prelude::Player::find()
            .filter(entity::player::Column::Ign.eq(ign))
            .one(self.db)
            .await?;

        entity.map(Player::from_entity).transpose()
    }

    /// Reads the current balance of a ledger account.
    ///
    /// # Returns
    /// - `Ok(Some(points))` - Current balance
    /// - `Ok(None)` - No player with that in-game name
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_points(&self, ign: &str) -> Result<Option<i64>, DbErr> {
        let entity = entity::prelude::Player::find()
            .filter(entity::player::Column::Ign.eq(ign))
            .one(self.db)
            .await?;

        Ok(entity.map(|player| player.points))
    }

    /// Adds a signed delta to a ledger account in a single UPDATE.
    ///
    /// Negative deltas only apply when the balance covers them, so the balance never
    /// drops below zero. Callers distinguish "unknown account" from "insufficient
    /// balance" by reading the balance when zero rows are affected.
    ///
    /// # Returns
    /// - `Ok(1)` - Delta applied
    /// - `Ok(0)` - Unknown account, or a debit larger than the balance
    /// - `Err(DbErr)` - Database error during update
    pub async fn apply_delta(&self, ign: &str, delta: i64) -> Result<u64, DbErr> {
        let mut update = entity::prelude::Player::update_many()
            .col_expr(
                entity::player::Column::Points,
                Expr::col(entity::player::Column::Points).add(delta),
            )
            .col_expr(entity::player::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::player::Column::Ign.eq(ign));

        if delta < 0 {
            // No balance covers a debit of i64::MIN
            let Some(debit) = delta.checked_neg() else {
                return Ok(0);
            };
            update = update.filter(entity::player::Column::Points.gte(debit));
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Updates the stored guild display name of a player.
    ///
    /// # Returns
    /// - `Ok(true)` - Player found and updated
    /// - `Ok(false)` - No player registered for that Discord ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_display_name(
        &self,
        discord_id: u64,
        display_name: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Player::update_many()
            .col_expr(
                entity::player::Column::DisplayName,
                Expr::value(display_name.to_string()),
            )
            .col_expr(entity::player::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::player::Column::DiscordId.eq(discord_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the players with the most points, ties broken alphabetically by in-game name.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of players to return
    pub async fn get_leaderboard(&self, limit: u64) -> Result<Vec<Player>, AppError> {
        let entities = entity::prelude::Player::find()
            .order_by_desc(entity::player::Column::Points)
            .order_by_asc(entity::player::Column::Ign)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(Player::from_entity).collect()
    }
}
