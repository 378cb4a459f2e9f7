use super::*;

/// Tests reading and changing a balance through the ledger.
///
/// Expected: get_balance reflects each applied delta
#[tokio::test]
async fn applies_signed_deltas() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player_with_points(db, 10).await?;
    let ledger = LedgerService::new(db);

    assert_eq!(ledger.apply_delta(&player.ign, 15).await?, 25);
    assert_eq!(ledger.apply_delta(&player.ign, -25).await?, 0);
    assert_eq!(ledger.get_balance(&player.ign).await?, 0);

    Ok(())
}

/// Tests a debit larger than the balance.
///
/// Expected: Err(InsufficientFunds) with the current balance, nothing applied
#[tokio::test]
async fn rejects_overdraft() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player_with_points(db, 10).await?;
    let ledger = LedgerService::new(db);

    let result = ledger.apply_delta(&player.ign, -11).await;

    assert!(matches!(
        result,
        Err(LedgerError::InsufficientFunds {
            balance: 10,
            amount: 11,
            ..
        })
    ));
    assert_eq!(ledger.get_balance(&player.ign).await?, 10);

    Ok(())
}

/// Tests ledger calls on an unknown key.
///
/// Expected: Err(NotRegistered) for both reads and deltas
#[tokio::test]
async fn unknown_key_is_not_registered() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ledger = LedgerService::new(db);

    assert!(matches!(
        ledger.get_balance("Ghost").await,
        Err(LedgerError::NotRegistered { .. })
    ));
    assert!(matches!(
        ledger.apply_delta("Ghost", 5).await,
        Err(LedgerError::NotRegistered { .. })
    ));

    Ok(())
}

/// Tests a debit of i64::MIN through the ledger.
///
/// Expected: Err(InsufficientFunds) with a saturated amount, balance unchanged
#[tokio::test]
async fn rejects_minimum_delta() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player_with_points(db, 10).await?;
    let ledger = LedgerService::new(db);

    let result = ledger.apply_delta(&player.ign, i64::MIN).await;

    assert!(matches!(
        result,
        Err(LedgerError::InsufficientFunds {
            balance: 10,
            amount: i64::MAX,
            ..
        })
    ));
    assert_eq!(ledger.get_balance(&player.ign).await?, 10);

    Ok(())
}
