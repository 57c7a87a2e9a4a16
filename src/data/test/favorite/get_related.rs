use super::*;

/// Tests fetching a user's favorited characters through the join table.
///
/// Expected: Ok with exactly the favorited characters
#[tokio::test]
async fn gets_favorited_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let favorited = factory::character::create_character(db).await?;
    let _other = factory::character::create_character(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.add(user.id, FavoriteKind::Character, favorited.id).await?;

    let characters = repo.get_characters(&user).await?;

    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].id, favorited.id);

    Ok(())
}

/// Tests fetching favorites for a user with no links of a given kind.
///
/// Expected: Ok with empty vec
#[tokio::test]
async fn returns_empty_without_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, character, _, _) = factory::create_user_with_catalog(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.add(user.id, FavoriteKind::Character, character.id).await?;

    let planets = repo.get_planets(&user).await?;
    let starships = repo.get_starships(&user).await?;

    assert!(planets.is_empty());
    assert!(starships.is_empty());

    Ok(())
}

/// Tests that favorites are scoped to the owning user.
///
/// Expected: each user sees only their own links
#[tokio::test]
async fn scopes_links_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    let planet_a = factory::planet::create_planet(db).await?;
    let planet_b = factory::planet::create_planet(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.add(first.id, FavoriteKind::Planet, planet_a.id).await?;
    repo.add(second.id, FavoriteKind::Planet, planet_b.id).await?;

    let first_planets = repo.get_planets(&first).await?;
    let second_planets = repo.get_planets(&second).await?;

    assert_eq!(first_planets.len(), 1);
    assert_eq!(first_planets[0].id, planet_a.id);
    assert_eq!(second_planets.len(), 1);
    assert_eq!(second_planets[0].id, planet_b.id);

    Ok(())
}
