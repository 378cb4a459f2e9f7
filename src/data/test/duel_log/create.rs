use super::*;

/// Tests recording a resolved duel.
///
/// Expected: Ok(DuelLog) echoing the recorded participants
#[tokio::test]
async fn records_duel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DuelLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DuelLogRepository::new(db);
    let log = repo
        .create(CreateDuelLogParam {
            challenger_id: 1,
            opponent_id: 2,
            wager: 50,
            winner_id: 2,
            loser_id: 1,
            winner_name: "Bravo".to_string(),
            loser_name: "Alpha".to_string(),
        })
        .await?;

    assert_eq!(log.challenger_id, 1);
    assert_eq!(log.opponent_id, 2);
    assert_eq!(log.wager, 50);
    assert_eq!(log.winner_id, 2);
    assert_eq!(log.winner_name, "Bravo");
    assert_eq!(log.loser_name, "Alpha");

    Ok(())
}
