use super::*;

/// Tests crediting and debiting a ledger account.
///
/// Expected: Ok(1) for both updates, balance reflects both deltas
#[tokio::test]
async fn applies_credit_and_debit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player_with_points(db, 100).await?;
    let repo = PlayerRepository::new(db);

    assert_eq!(repo.apply_delta(&player.ign, 50).await?, 1);
    assert_eq!(repo.apply_delta(&player.ign, -120).await?, 1);
    assert_eq!(repo.get_points(&player.ign).await?, Some(30));

    Ok(())
}

/// Tests that a debit larger than the balance is not applied.
///
/// Expected: Ok(0) and unchanged balance
#[tokio::test]
async fn refuses_overdraft() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player_with_points(db, 40).await?;
    let repo = PlayerRepository::new(db);

    assert_eq!(repo.apply_delta(&player.ign, -41).await?, 0);
    assert_eq!(repo.get_points(&player.ign).await?, Some(40));

    // Draining to exactly zero is allowed
    assert_eq!(repo.apply_delta(&player.ign, -40).await?, 1);
    assert_eq!(repo.get_points(&player.ign).await?, Some(0));

    Ok(())
}

/// Tests applying a delta to an unknown ledger key.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_no_rows_for_unknown_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);

    assert_eq!(repo.apply_delta("Ghost", 10).await?, 0);

    Ok(())
}

/// Tests the most negative possible delta.
///
/// Expected: Ok(0) without overflowing, balance unchanged
#[tokio::test]
async fn refuses_minimum_delta() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player_with_points(db, i64::MAX).await?;
    let repo = PlayerRepository::new(db);

    assert_eq!(repo.apply_delta(&player.ign, i64::MIN).await?, 0);
    assert_eq!(repo.get_points(&player.ign).await?, Some(i64::MAX));

    Ok(())
}
