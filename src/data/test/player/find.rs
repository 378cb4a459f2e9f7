use super::*;

/// Tests finding an existing player by Discord ID and by in-game name.
///
/// Expected: Ok(Some(Player)) from both lookups
#[tokio::test]
async fn finds_existing_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .discord_id(555)
        .ign("Vex")
        .points(250)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);

    let by_id = repo.find_by_discord_id(555).await?.unwrap();
    assert_eq!(by_id.ign, "Vex");
    assert_eq!(by_id.points, 250);

    let by_ign = repo.find_by_ign("Vex").await?.unwrap();
    assert_eq!(by_ign, by_id);

    assert_eq!(repo.get_points("Vex").await?, Some(250));

    Ok(())
}

/// Tests querying for players that were never registered.
///
/// Expected: Ok(None) from every lookup
#[tokio::test]
async fn returns_none_for_unknown_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);

    assert!(repo.find_by_discord_id(999999999).await?.is_none());
    assert!(repo.find_by_ign("Nobody").await?.is_none());
    assert!(repo.get_points("Nobody").await?.is_none());

    Ok(())
}
