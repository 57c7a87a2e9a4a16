use super::*;

/// Tests the existence check before and after adding a link.
///
/// Expected: false before the insert, true after
#[tokio::test]
async fn reflects_link_presence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, character, _, _) = factory::create_user_with_catalog(db).await?;

    let repo = FavoriteRepository::new(db);
    assert!(!repo.exists(user.id, FavoriteKind::Character, character.id).await?);

    repo.add(user.id, FavoriteKind::Character, character.id).await?;
    assert!(repo.exists(user.id, FavoriteKind::Character, character.id).await?);

    Ok(())
}

/// Tests that a link of one kind does not satisfy the check for another kind
/// with the same numeric IDs.
///
/// Expected: true only for the kind that was added
#[tokio::test]
async fn is_scoped_to_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, character, _, _) = factory::create_user_with_catalog(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.add(user.id, FavoriteKind::Character, character.id).await?;

    assert!(repo.exists(user.id, FavoriteKind::Character, character.id).await?);
    assert!(!repo.exists(user.id, FavoriteKind::Planet, character.id).await?);
    assert!(!repo.exists(user.id, FavoriteKind::Starship, character.id).await?);

    Ok(())
}
