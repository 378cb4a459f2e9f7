//! Registered clan member and their point balance.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    /// Discord user ID stored as text.
    #[sea_orm(primary_key, auto_increment = false)]
    pub discord_id: String,
    /// In-game name, used as the ledger account key.
    #[sea_orm(unique)]
    pub ign: String,
    pub display_name: String,
    pub points: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
