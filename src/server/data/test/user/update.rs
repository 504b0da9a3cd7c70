use super::*;

/// Tests updating only the name.
///
/// Verifies that the password hash is left untouched when not provided.
///
/// Expected: Ok(Some(User)) with new name and original hash
#[tokio::test]
async fn updates_name_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("edit@mottu.com")
        .password_hash("original")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .update(
            "edit@mottu.com",
            UserChanges {
                name: Some("Renamed".to_string()),
                password_hash: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(user.name, "Renamed");
    assert_eq!(user.password_hash, "original");

    Ok(())
}

/// Tests an update with no changes.
///
/// Expected: Ok(Some(User)) unchanged
#[tokio::test]
async fn empty_changes_leave_user_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("same@mottu.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .update("same@mottu.com", UserChanges::default())
        .await?
        .unwrap();

    assert_eq!(user.name, created.name);
    assert_eq!(user.password_hash, created.password_hash);

    Ok(())
}

/// Tests updating an unknown user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(
            "ghost@mottu.com",
            UserChanges {
                name: Some("Ghost".to_string()),
                password_hash: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
