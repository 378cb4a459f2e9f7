use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DuelLog::Table)
                    .if_not_exists()
                    .col(pk_auto(DuelLog::Id))
                    .col(string(DuelLog::ChallengerId))
                    .col(string(DuelLog::OpponentId))
                    .col(big_integer(DuelLog::Wager))
                    .col(string(DuelLog::WinnerId))
                    .col(string(DuelLog::LoserId))
                    .col(string(DuelLog::WinnerName))
                    .col(string(DuelLog::LoserName))
                    .col(
                        timestamp_with_time_zone(DuelLog::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DuelLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DuelLog {
    Table,
    Id,
    ChallengerId,
    OpponentId,
    Wager,
    WinnerId,
    LoserId,
    WinnerName,
    LoserName,
    CreatedAt,
}
