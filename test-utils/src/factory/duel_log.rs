//! Duel log factory for seeding analytics rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating duel log rows between two existing players.
///
/// Winner defaults to the challenger; call `opponent_wins()` to flip it.
pub struct DuelLogFactory<'a> {
    db: &'a DatabaseConnection,
    challenger: &'a entity::player::Model,
    opponent: &'a entity::player::Model,
    wager: i64,
    challenger_wins: bool,
    created_at: DateTime<Utc>,
}

impl<'a> DuelLogFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        challenger: &'a entity::player::Model,
        opponent: &'a entity::player::Model,
    ) -> Self {
        Self {
            db,
            challenger,
            opponent,
            wager: 10,
            challenger_wins: true,
            created_at: Utc::now(),
        }
    }

    pub fn wager(mut self, wager: i64) -> Self {
        self.wager = wager;
        self
    }

    pub fn opponent_wins(mut self) -> Self {
        self.challenger_wins = false;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the duel log row.
    pub async fn build(self) -> Result<entity::duel_log::Model, DbErr> {
        let (winner, loser) = if self.challenger_wins {
            (self.challenger, self.opponent)
        } else {
            (self.opponent, self.challenger)
        };

        entity::duel_log::ActiveModel {
            challenger_id: ActiveValue::Set(self.challenger.discord_id.clone()),
            opponent_id: ActiveValue::Set(self.opponent.discord_id.clone()),
            wager: ActiveValue::Set(self.wager),
            winner_id: ActiveValue::Set(winner.discord_id.clone()),
            loser_id: ActiveValue::Set(loser.discord_id.clone()),
            winner_name: ActiveValue::Set(winner.ign.clone()),
            loser_name: ActiveValue::Set(loser.ign.clone()),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a duel log row where the challenger won a 10 point wager.
pub async fn create_duel_log(
    db: &DatabaseConnection,
    challenger: &entity::player::Model,
    opponent: &entity::player::Model,
) -> Result<entity::duel_log::Model, DbErr> {
    DuelLogFactory::new(db, challenger, opponent).build().await
}
