use super::*;

/// Tests fetching an existing planet by ID.
///
/// Expected: Ok(Some(Model))
#[tokio::test]
async fn finds_existing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::planet::create_planet(db).await?;

    let repo = PlanetRepository::new(db);
    let found = repo.get_by_id(created.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().name, created.name);

    Ok(())
}

/// Tests fetching a planet ID that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let result = repo.get_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
