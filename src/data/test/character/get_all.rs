use super::*;

/// Tests listing when no characters have been created.
///
/// Expected: Ok with empty vec
#[tokio::test]
async fn returns_empty_when_no_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let result = repo.get_all().await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}

/// Tests listing multiple characters.
///
/// Expected: Ok with every created character present
#[tokio::test]
async fn returns_all_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::character::create_character(db).await?;
    let second = factory::character::create_character(db).await?;
    let third = factory::character::create_character(db).await?;

    let repo = CharacterRepository::new(db);
    let all = repo.get_all().await?;

    assert_eq!(all.len(), 3);
    let ids: Vec<i32> = all.iter().map(|c| c.id).collect();
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));
    assert!(ids.contains(&third.id));

    Ok(())
}
