use rand::{rngs::StdRng, SeedableRng};
use sea_orm::DatabaseConnection;

use crate::{
    data::player::PlayerRepository,
    error::{duel::DuelError, AppError},
    model::duel::{
        DuelAction, DuelChallenge, DuelParty, DuelResolution, DuelState, Duelist,
        ProposeDuelParam,
    },
    service::duel::DuelService,
};
use test_utils::{builder::TestBuilder, factory};


fn human(discord_id: u64) -> Duelist {
    Duelist {
        discord_id,
        is_bot: false,
    }
}

fn param(challenger: u64, opponent: u64, wager: i64) -> ProposeDuelParam {
    ProposeDuelParam {
        challenger: human(challenger),
        opponent: human(opponent),
        wager,
    }
}

/// Proposes a duel between two freshly created players with the given balances.
async fn proposed(
    db: &DatabaseConnection,
    challenger_points: i64,
    opponent_points: i64,
    wager: i64,
) -> Result<DuelChallenge, AppError> {
    let challenger = factory::create_player_with_points(db, challenger_points).await?;
    let opponent = factory::create_player_with_points(db, opponent_points).await?;

    DuelService::new(db)
        .propose(
            1,
            param(
                challenger.discord_id.parse().unwrap(),
                opponent.discord_id.parse().unwrap(),
                wager,
            ),
        )
        .await
}

async fn points(db: &DatabaseConnection, ign: &str) -> Option<i64> {
    PlayerRepository::new(db).get_points(ign).await.unwrap()
}
