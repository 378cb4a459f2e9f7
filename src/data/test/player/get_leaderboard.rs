use super::*;

/// Tests leaderboard ordering and limit.
///
/// Verifies players are ordered by points descending, ties broken by in-game name,
/// and that the limit caps the result.
///
/// Expected: Ok(Vec<Player>) of length 3 in the expected order
#[tokio::test]
async fn orders_by_points_then_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (ign, points) in [("Delta", 10), ("Bravo", 300), ("Alpha", 300), ("Charlie", 50)] {
        factory::player::PlayerFactory::new(db)
            .ign(ign)
            .points(points)
            .build()
            .await?;
    }

    let repo = PlayerRepository::new(db);
    let top = repo.get_leaderboard(3).await?;

    let names: Vec<&str> = top.iter().map(|p| p.ign.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);

    Ok(())
}
