use super::*;

/// Tests fetching favorites for a user with none.
///
/// Expected: Ok with three empty groups
#[tokio::test]
async fn returns_empty_groups_for_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = FavoriteService::new(db);
    let favorites = service.get_user_favorites(user.id).await?;

    assert!(favorites.characters.is_empty());
    assert!(favorites.planets.is_empty());
    assert!(favorites.starships.is_empty());

    Ok(())
}

/// Tests fetching favorites grouped by kind.
///
/// Expected: Ok with each link in its own group
#[tokio::test]
async fn groups_favorites_by_kind() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, character, planet, starship) = factory::create_user_with_catalog(db).await?;

    let service = FavoriteService::new(db);
    service.add(user.id, FavoriteKind::Character, character.id).await?;
    service.add(user.id, FavoriteKind::Planet, planet.id).await?;
    service.add(user.id, FavoriteKind::Starship, starship.id).await?;

    let favorites = service.get_user_favorites(user.id).await?;

    assert_eq!(favorites.characters.len(), 1);
    assert_eq!(favorites.characters[0].id, character.id);
    assert_eq!(favorites.planets.len(), 1);
    assert_eq!(favorites.planets[0].id, planet.id);
    assert_eq!(favorites.starships.len(), 1);
    assert_eq!(favorites.starships[0].id, starship.id);

    Ok(())
}

/// Tests fetching favorites for a user that does not exist.
///
/// Expected: Err(NotFound) with "User not found"
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = FavoriteService::new(db);
    let result = service.get_user_favorites(999).await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "User not found"),
        other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
    }

    Ok(())
}
