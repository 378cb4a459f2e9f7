use super::*;
use chrono::{Duration, Utc};
use test_utils::factory::duel_log::DuelLogFactory;

/// Tests fetching a player's duels from either side, newest first.
///
/// Expected: Ok(Vec<DuelLog>) containing only duels involving the player
#[tokio::test]
async fn returns_duels_on_either_side_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alpha = factory::create_player(db).await?;
    let bravo = factory::create_player(db).await?;
    let charlie = factory::create_player(db).await?;

    let now = Utc::now();
    DuelLogFactory::new(db, &alpha, &bravo)
        .wager(1)
        .created_at(now - Duration::minutes(10))
        .build()
        .await?;
    DuelLogFactory::new(db, &charlie, &alpha)
        .wager(2)
        .opponent_wins()
        .created_at(now - Duration::minutes(5))
        .build()
        .await?;
    DuelLogFactory::new(db, &bravo, &charlie)
        .wager(3)
        .created_at(now)
        .build()
        .await?;

    let repo = DuelLogRepository::new(db);
    let alpha_id: u64 = alpha.discord_id.parse().unwrap();
    let logs = repo.get_recent_for_player(alpha_id, 10).await?;

    let wagers: Vec<i64> = logs.iter().map(|l| l.wager).collect();
    assert_eq!(wagers, vec![2, 1]);
    assert_eq!(logs[0].winner_id, alpha_id);

    let limited = repo.get_recent_for_player(alpha_id, 1).await?;
    assert_eq!(limited.len(), 1);

    Ok(())
}
