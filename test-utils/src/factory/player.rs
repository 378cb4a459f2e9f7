//! Player factory for creating registered test players.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let player = PlayerFactory::new(&db)
///     .discord_id(123456789)
///     .ign("Moonman")
///     .points(100)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: u64,
    ign: String,
    display_name: String,
    points: i64,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: auto-incremented, offset so it never collides with small literal ids
    /// - ign: `"Player{id}"`
    /// - display_name: `"Player {id}"`
    /// - points: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: 1_000_000 + id,
            ign: format!("Player{}", id),
            display_name: format!("Player {}", id),
            points: 0,
        }
    }

    pub fn discord_id(mut self, discord_id: u64) -> Self {
        self.discord_id = discord_id;
        self
    }

    pub fn ign(mut self, ign: impl Into<String>) -> Self {
        self.ign = ign.into();
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn points(mut self, points: i64) -> Self {
        self.points = points;
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - The created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        let now = Utc::now();
        entity::player::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id.to_string()),
            ign: ActiveValue::Set(self.ign),
            display_name: ActiveValue::Set(self.display_name),
            points: ActiveValue::Set(self.points),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values and a zero balance.
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}

/// Creates a player with default values and the given balance.
pub async fn create_player_with_points(
    db: &DatabaseConnection,
    points: i64,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).points(points).build().await
}
