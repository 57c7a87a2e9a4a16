use super::*;

/// Tests creating a starship and reading it back.
///
/// Expected: Ok with starship created and retrievable
#[tokio::test]
async fn creates_and_fetches_starship() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Starship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StarshipRepository::new(db);
    let starship = repo
        .create(
            "Millennium Falcon".to_string(),
            Some("YT-1300 light freighter".to_string()),
            Some("Light freighter".to_string()),
        )
        .await?;

    let found = repo.get_by_id(starship.id).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().name, "Millennium Falcon");

    Ok(())
}

/// Tests listing all starships after a few inserts.
///
/// Expected: Ok with every created starship present
#[tokio::test]
async fn lists_created_starships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Starship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::starship::create_starship(db).await?;
    let second = factory::starship::create_starship(db).await?;

    let repo = StarshipRepository::new(db);
    let all = repo.get_all().await?;

    assert_eq!(all.len(), 2);
    let ids: Vec<i32> = all.iter().map(|s| s.id).collect();
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));

    Ok(())
}
