//! Analytics record of a resolved duel.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "duel_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub challenger_id: String,
    pub opponent_id: String,
    pub wager: i64,
    pub winner_id: String,
    pub loser_id: String,
    pub winner_name: String,
    pub loser_name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
