use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok(true) and the user is gone
#[tokio::test]
async fn deletes_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("gone@mottu.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.delete_by_email("gone@mottu.com").await?);
    assert!(repo.find_by_email("gone@mottu.com").await?.is_none());
    assert_eq!(repo.count().await?, 0);

    Ok(())
}

/// Tests deleting an unknown user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.delete_by_email("ghost@mottu.com").await?);

    Ok(())
}
