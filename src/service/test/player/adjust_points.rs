use super::*;

/// Tests granting and deducting points.
///
/// Expected: Ok with the new balance after each adjustment
#[tokio::test]
async fn adjusts_balance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player_with_points(db, 10).await?;
    let discord_id: u64 = player.discord_id.parse().unwrap();
    let service = PlayerService::new(db);

    let balance = service
        .adjust_points(AdjustPointsParam {
            discord_id,
            delta: 90,
        })
        .await?;
    assert_eq!(balance, 100);

    let balance = service
        .adjust_points(AdjustPointsParam {
            discord_id,
            delta: -100,
        })
        .await?;
    assert_eq!(balance, 0);

    Ok(())
}

/// Tests a deduction that would make the balance negative.
///
/// Expected: Err(InsufficientFunds), balance unchanged
#[tokio::test]
async fn rejects_negative_result() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player_with_points(db, 10).await?;
    let discord_id: u64 = player.discord_id.parse().unwrap();
    let service = PlayerService::new(db);

    let result = service
        .adjust_points(AdjustPointsParam {
            discord_id,
            delta: -11,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::LedgerErr(LedgerError::InsufficientFunds { .. }))
    ));
    assert_eq!(service.get_player(discord_id).await?.unwrap().points, 10);

    Ok(())
}

/// Tests adjusting an unregistered user and a zero delta.
///
/// Expected: Err(NotFound) and Err(BadRequest)
#[tokio::test]
async fn rejects_unknown_player_and_zero_delta() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlayerService::new(db);

    let result = service
        .adjust_points(AdjustPointsParam {
            discord_id: 404,
            delta: 5,
        })
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = service
        .adjust_points(AdjustPointsParam {
            discord_id: 404,
            delta: 0,
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests amounts outside the allowed adjustment range.
///
/// Expected: Err(BadRequest) for both signs and i64::MIN, balance unchanged
#[tokio::test]
async fn rejects_out_of_range_amounts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player_with_points(db, 10).await?;
    let discord_id: u64 = player.discord_id.parse().unwrap();
    let service = PlayerService::new(db);

    for delta in [MAX_ADJUSTMENT + 1, -MAX_ADJUSTMENT - 1, i64::MIN] {
        let result = service
            .adjust_points(AdjustPointsParam { discord_id, delta })
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))), "{}", delta);
    }

    let balance = service
        .adjust_points(AdjustPointsParam {
            discord_id,
            delta: MAX_ADJUSTMENT,
        })
        .await?;
    assert_eq!(balance, MAX_ADJUSTMENT + 10);

    Ok(())
}
