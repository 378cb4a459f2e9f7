//! Duel log repository for analytics records.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::{
    error::AppError,
    model::duel_log::{CreateDuelLogParam, DuelLog},
};

/// Repository providing database operations for duel analytics records.
pub struct DuelLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DuelLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a resolved duel.
    ///
    /// # Returns
    /// - `Ok(DuelLog)` - The created record
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateDuelLogParam) -> Result<DuelLog, AppError> {
        let entity = entity::prelude::DuelLog::insert(entity::duel_log::ActiveModel {
            challenger_id: ActiveValue::Set(param.challenger_id.to_string()),
            opponent_id: ActiveValue::Set(param.opponent_id.to_string()),
            wager: ActiveValue::Set(param.wager),
            winner_id: ActiveValue::Set(param.winner_id.to_string()),
            loser_id: ActiveValue::Set(param.loser_id.to_string()),
            winner_name: ActiveValue::Set(param.winner_name),
            loser_name: ActiveValue::Set(param.loser_name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        DuelLog::from_entity(entity)
    }

    /// Gets the most recent duels a player took part in, on either side.
    ///
    /// # Arguments
    /// - `discord_id` - Discord ID of the player
    /// - `limit` - Maximum number of records to return
    ///
    /// # Returns
    /// - `Ok(Vec<DuelLog>)` - Records ordered newest first
    /// - `Err(AppError)` - Database error or corrupt stored ID
    pub async fn get_recent_for_player(
        &self,
        discord_id: u64,
        limit: u64,
    ) -> Result<Vec<DuelLog>, AppError> {
        let discord_id = discord_id.to_string();
        let entities = entity::prelude::DuelLog::find()
            .filter(
                Condition::any()
                    .add(entity::duel_log::Column::ChallengerId.eq(discord_id.clone()))
                    .add(entity::duel_log::Column::OpponentId.eq(discord_id)),
            )
            .order_by_desc(entity::duel_log::Column::CreatedAt)
            .order_by_desc(entity::duel_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(DuelLog::from_entity).collect()
    }
}
