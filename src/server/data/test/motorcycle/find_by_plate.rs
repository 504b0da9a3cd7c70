use super::*;

/// Tests finding a motorcycle by plate.
///
/// Expected: Ok(Some(Motorcycle))
#[tokio::test]
async fn finds_existing_motorcycle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Motorcycle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::motorcycle::MotorcycleFactory::new(db)
        .plate("ABC-1234")
        .year(2023)
        .model("Pop")
        .build()
        .await?;

    let repo = MotorcycleRepository::new(db);
    let motorcycle = repo.find_by_plate("ABC-1234").await?.unwrap();

    assert_eq!(motorcycle.year, 2023);
    assert_eq!(motorcycle.model, MotorcycleModel::Pop);
    assert!(repo.exists_by_plate("ABC-1234").await?);

    Ok(())
}

/// Tests looking up a plate that is not registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_plate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Motorcycle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MotorcycleRepository::new(db);

    assert!(repo.find_by_plate("ZZZ-9999").await?.is_none());
    assert!(!repo.exists_by_plate("ZZZ-9999").await?);

    Ok(())
}

/// Tests reading a row whose model was written outside the application.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_model() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Motorcycle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::motorcycle::MotorcycleFactory::new(db)
        .plate("BAD-0001")
        .model("Scooter")
        .build()
        .await?;

    let repo = MotorcycleRepository::new(db);
    let result = repo.find_by_plate("BAD-0001").await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
