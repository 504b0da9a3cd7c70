use super::*;
use sea_orm::EntityTrait;

/// Tests registering an electric motorcycle.
///
/// Verifies that the `E` model is stored in its storage form and read back
/// as the same variant.
///
/// Expected: Ok(Motorcycle) with model E and stored value "E"
#[tokio::test]
async fn stores_electric_model() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Motorcycle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MotorcycleRepository::new(db);
    let motorcycle = repo
        .create(NewMotorcycle {
            plate: "ELE-0001".to_string(),
            year: 2024,
            model: MotorcycleModel::E,
        })
        .await?;

    assert_eq!(motorcycle.model, MotorcycleModel::E);
    assert_eq!(motorcycle.into_dto().model, "-E");

    let stored = entity::prelude::Motorcycle::find_by_id(1).one(db).await?.unwrap();
    assert_eq!(stored.model, "E");

    Ok(())
}

/// Tests the unique plate constraint.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_on_duplicate_plate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Motorcycle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::motorcycle::MotorcycleFactory::new(db)
        .plate("DUP-0001")
        .build()
        .await?;

    let repo = MotorcycleRepository::new(db);
    let result = repo
        .create(NewMotorcycle {
            plate: "DUP-0001".to_string(),
            year: 2021,
            model: MotorcycleModel::Pop,
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
