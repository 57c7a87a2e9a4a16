use super::*;
use sea_orm::EntityTrait;

/// Tests creating a character with all optional fields set.
///
/// Verifies that the repository inserts a new character row and that the
/// values round-trip through the database.
///
/// Expected: Ok with character created
#[tokio::test]
async fn creates_character_with_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let result = repo
        .create(
            "Luke Skywalker".to_string(),
            Some("Human".to_string()),
            Some("Farm boy turned Jedi".to_string()),
            Some("Tatooine".to_string()),
        )
        .await;

    assert!(result.is_ok());
    let character = result.unwrap();
    assert_eq!(character.name, "Luke Skywalker");
    assert_eq!(character.species.as_deref(), Some("Human"));
    assert_eq!(character.homeworld.as_deref(), Some("Tatooine"));

    // Verify character exists in database
    let db_character = entity::prelude::Character::find_by_id(character.id)
        .one(db)
        .await?;
    assert!(db_character.is_some());
    assert_eq!(db_character.unwrap().name, "Luke Skywalker");

    Ok(())
}

/// Tests creating a character with no optional fields.
///
/// Verifies that species, description, and homeworld may all be absent.
///
/// Expected: Ok with character created and None optionals
#[tokio::test]
async fn creates_character_without_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let character = repo
        .create("IG-88".to_string(), None, None, None)
        .await?;

    assert_eq!(character.name, "IG-88");
    assert!(character.species.is_none());
    assert!(character.description.is_none());
    assert!(character.homeworld.is_none());

    Ok(())
}

/// Tests that subsequent characters receive increasing auto-generated IDs.
///
/// Expected: Ok with distinct IDs
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let first = repo.create("First".to_string(), None, None, None).await?;
    let second = repo.create("Second".to_string(), None, None, None).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
