use super::*;

/// Tests paging through users ordered by name.
///
/// Verifies ordering, page slicing and that the total reflects all rows.
///
/// Expected: Ok((users, 3)) with two users on the first page
#[tokio::test]
async fn pages_users_ordered_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Carla", "Ana", "Bruno"] {
        factory::user::UserFactory::new(db).name(name).build().await?;
    }

    let repo = UserRepository::new(db);

    let (first, total) = repo
        .get_all_paginated(&PageRequest::new(Some(1), Some(2)))
        .await?;
    assert_eq!(total, 3);
    assert_eq!(
        first.iter().map(|u| u.name.as_str()).collect::<Vec<_>>(),
        vec!["Ana", "Bruno"]
    );

    let (second, _) = repo
        .get_all_paginated(&PageRequest::new(Some(2), Some(2)))
        .await?;
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "Carla");

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok((empty, total))
#[tokio::test]
async fn returns_empty_page_past_the_end() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_all_paginated(&PageRequest::new(Some(5), Some(10)))
        .await?;

    assert!(users.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
