use super::*;

/// Tests registering a new player.
///
/// Expected: Ok with a trimmed in-game name and zero points
#[tokio::test]
async fn registers_with_zero_points() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = PlayerService::new(db)
        .register(register_param(42, "  Moonman  "))
        .await?;

    assert_eq!(player.discord_id, 42);
    assert_eq!(player.ign, "Moonman");
    assert_eq!(player.display_name, "Member 42");
    assert_eq!(player.points, 0);

    Ok(())
}

/// Tests registering twice from the same Discord account.
///
/// Expected: Err(BadRequest) mentioning the existing name
#[tokio::test]
async fn rejects_second_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlayerService::new(db);
    service.register(register_param(42, "Moonman")).await?;

    let result = service.register(register_param(42, "Sunman")).await;

    match result {
        Err(AppError::BadRequest(msg)) => assert!(msg.contains("Moonman")),
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}

/// Tests registering a name that belongs to someone else.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_taken_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_player(db).await?;

    let result = PlayerService::new(db)
        .register(register_param(42, &existing.ign))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests in-game name length limits.
///
/// Expected: Err(BadRequest) for blank and 33 character names, Ok for 32 characters
#[tokio::test]
async fn validates_name_length() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlayerService::new(db);
    let too_long = "x".repeat(33);

    for ign in ["", "   ", too_long.as_str()] {
        let result = service.register(register_param(1, ign)).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    let player = service.register(register_param(1, &"x".repeat(32))).await?;
    assert_eq!(player.ign.len(), 32);

    Ok(())
}
