use super::*;

/// Tests registering a new player.
///
/// Verifies that the repository inserts the player with a zero balance and returns
/// the stored record converted to a domain model.
///
/// Expected: Ok(Player) with zero points
#[tokio::test]
async fn creates_player_with_zero_balance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let player = repo
        .create(RegisterPlayerParam {
            discord_id: 123456789,
            ign: "Moonman".to_string(),
            display_name: "Tank Moonman".to_string(),
        })
        .await?;

    assert_eq!(player.discord_id, 123456789);
    assert_eq!(player.ign, "Moonman");
    assert_eq!(player.display_name, "Tank Moonman");
    assert_eq!(player.points, 0);

    Ok(())
}

/// Tests registering the same in-game name twice.
///
/// Verifies that the unique constraint on the ledger key rejects a second player
/// claiming an in-game name that is already registered.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn rejects_duplicate_ign() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .ign("Moonman")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let result = repo
        .create(RegisterPlayerParam {
            discord_id: 42,
            ign: "Moonman".to_string(),
            display_name: "Impostor".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
