use super::*;

/// Tests moving points between two accounts.
///
/// Expected: Ok with both new balances, sum conserved
#[tokio::test]
async fn moves_points_between_accounts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let from = factory::create_player_with_points(db, 100).await?;
    let to = factory::create_player_with_points(db, 20).await?;

    let receipt = LedgerService::new(db).transfer(&from.ign, &to.ign, 30).await?;

    assert_eq!(
        receipt,
        TransferReceipt {
            from_balance: 70,
            to_balance: 50,
        }
    );

    Ok(())
}

/// Tests a transfer the sender can't cover.
///
/// Expected: Err(InsufficientFunds) naming the sender, neither balance changed
#[tokio::test]
async fn rejects_underfunded_sender() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let from = factory::create_player_with_points(db, 5).await?;
    let to = factory::create_player_with_points(db, 20).await?;

    let result = LedgerService::new(db).transfer(&from.ign, &to.ign, 30).await;

    match result {
        Err(LedgerError::InsufficientFunds { key, balance, amount }) => {
            assert_eq!(key, from.ign);
            assert_eq!(balance, 5);
            assert_eq!(amount, 30);
        }
        other => panic!("expected InsufficientFunds, got {:?}", other),
    }

    let repo = PlayerRepository::new(db);
    assert_eq!(repo.get_points(&from.ign).await?, Some(5));
    assert_eq!(repo.get_points(&to.ign).await?, Some(20));

    Ok(())
}

/// Tests that a failed credit rolls back the debit.
///
/// Expected: Err(NotRegistered) for the receiver, sender balance unchanged
#[tokio::test]
async fn rolls_back_debit_when_credit_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let from = factory::create_player_with_points(db, 100).await?;

    let result = LedgerService::new(db).transfer(&from.ign, "Ghost", 40).await;

    assert!(matches!(
        result,
        Err(LedgerError::NotRegistered { ref key }) if key == "Ghost"
    ));
    assert_eq!(
        PlayerRepository::new(db).get_points(&from.ign).await?,
        Some(100)
    );

    Ok(())
}
