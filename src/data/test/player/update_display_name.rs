use super::*;

/// Tests updating a registered player's display name.
///
/// Expected: Ok(true) and the new name stored
#[tokio::test]
async fn updates_registered_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .discord_id(77)
        .display_name("Old Name")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);

    assert!(repo.update_display_name(77, "New Name").await?);
    let player = repo.find_by_discord_id(77).await?.unwrap();
    assert_eq!(player.display_name, "New Name");

    Ok(())
}

/// Tests updating the display name of someone who never registered.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_unregistered_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);

    assert!(!repo.update_display_name(78, "Anyone").await?);

    Ok(())
}
