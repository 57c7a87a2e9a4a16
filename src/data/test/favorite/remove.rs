use super::*;

/// Tests removing an existing favorite link.
///
/// Expected: Ok with link gone afterwards
#[tokio::test]
async fn removes_existing_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, starship) = factory::create_user_with_catalog(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.add(user.id, FavoriteKind::Starship, starship.id).await?;
    assert!(repo.exists(user.id, FavoriteKind::Starship, starship.id).await?);

    repo.remove(user.id, FavoriteKind::Starship, starship.id).await?;
    assert!(!repo.exists(user.id, FavoriteKind::Starship, starship.id).await?);

    Ok(())
}

/// Tests that removing one kind leaves links of other kinds untouched.
///
/// Expected: Ok with only the targeted link removed
#[tokio::test]
async fn leaves_other_kinds_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, character, planet, _) = factory::create_user_with_catalog(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.add(user.id, FavoriteKind::Character, character.id).await?;
    repo.add(user.id, FavoriteKind::Planet, planet.id).await?;

    repo.remove(user.id, FavoriteKind::Character, character.id).await?;

    assert!(!repo.exists(user.id, FavoriteKind::Character, character.id).await?);
    assert!(repo.exists(user.id, FavoriteKind::Planet, planet.id).await?);

    Ok(())
}
