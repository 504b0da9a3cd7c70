use super::*;

/// Tests creating a user.
///
/// Verifies that the repository assigns a fresh UUID and stores the given
/// name, email and password hash.
///
/// Expected: Ok(User) with non-nil id
#[tokio::test]
async fn creates_user_with_generated_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Rider".to_string(),
            email: "rider@mottu.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    assert!(!user.id.is_nil());
    assert_eq!(user.name, "Rider");
    assert_eq!(user.email, "rider@mottu.com");
    assert_eq!(user.password_hash, "hash");

    Ok(())
}

/// Tests the unique email constraint.
///
/// Verifies that inserting a second user with the same email fails at the
/// database level.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_on_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@mottu.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            name: "Other".to_string(),
            email: "taken@mottu.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
