use super::*;

/// Tests creating a new user.
///
/// Verifies that a freshly created user is active and has no subscription
/// date, and that the password is stored exactly as given.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            "leia@alderaan.example".to_string(),
            "secret".to_string(),
            "Leia".to_string(),
            "Organa".to_string(),
        )
        .await?;

    assert_eq!(user.email, "leia@alderaan.example");
    assert_eq!(user.password, "secret");
    assert!(user.is_active);
    assert!(user.subcription_date.is_none());

    Ok(())
}

/// Tests inserting a second user with an already used email.
///
/// The email column carries a unique constraint, so the insert fails at the
/// database level.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(
        "han@corellia.example".to_string(),
        "secret".to_string(),
        "Han".to_string(),
        "Solo".to_string(),
    )
    .await?;

    let result = repo
        .create(
            "han@corellia.example".to_string(),
            "other".to_string(),
            "Other".to_string(),
            "Solo".to_string(),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
