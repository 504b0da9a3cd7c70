use super::*;

/// Tests finding an existing user by email.
///
/// Expected: Ok(Some(User)) with matching data
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("find@mottu.com")
        .name("Findable")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("find@mottu.com").await?.unwrap();

    assert_eq!(user.id.to_string(), created.id);
    assert_eq!(user.name, "Findable");
    assert!(repo.exists_by_email("find@mottu.com").await?);

    Ok(())
}

/// Tests that email lookups are case-sensitive.
///
/// Expected: Ok(None)
#[tokio::test]
async fn does_not_match_different_case() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("case@mottu.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_email("CASE@mottu.com").await?.is_none());
    assert!(!repo.exists_by_email("CASE@mottu.com").await?);

    Ok(())
}

/// Tests that a row with a malformed stored id surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_malformed_stored_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .id("not-a-uuid")
        .email("broken@mottu.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_email("broken@mottu.com").await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
