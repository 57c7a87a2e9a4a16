use super::*;

/// Tests removing an existing favorite.
///
/// Expected: Ok with the link gone afterwards
#[tokio::test]
async fn removes_existing_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, planet, _) = factory::create_user_with_catalog(db).await?;

    let service = FavoriteService::new(db);
    service.add(user.id, FavoriteKind::Planet, planet.id).await?;
    service.remove(user.id, FavoriteKind::Planet, planet.id).await?;

    let favorites = service.get_user_favorites(user.id).await?;
    assert!(favorites.planets.is_empty());

    Ok(())
}

/// Tests removing a favorite that was never added.
///
/// Expected: Err(BadRequest) with the absence message
#[tokio::test]
async fn rejects_absent_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, planet, _) = factory::create_user_with_catalog(db).await?;

    let service = FavoriteService::new(db);
    let result = service.remove(user.id, FavoriteKind::Planet, planet.id).await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Planet not in favorites"),
        other => panic!("expected BadRequest, got {:?}", other.map(|_| ())),
    }

    Ok(())
}

/// Tests removing a favorite for a user that does not exist.
///
/// The existence checks run before the link check, so the miss is a 404
/// rather than a complaint about the link.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::character::create_character(db).await?;

    let service = FavoriteService::new(db);
    let result = service.remove(999, FavoriteKind::Character, character.id).await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "User or Character not found"),
        other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
    }

    Ok(())
}
