use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::motorcycle::{CreateMotorcycleParam, MotorcycleModel},
    service::motorcycle::MotorcycleService,
};

fn param(plate: &str, year: i32, model: &str) -> CreateMotorcycleParam {
    CreateMotorcycleParam {
        plate: plate.to_string(),
        year,
        model: model.to_string(),
    }
}

/// Tests that plates are uppercased before validation and storage.
///
/// Expected: Ok(Motorcycle) with plate "ABC-1234", found again with lowercase lookup
#[tokio::test]
async fn uppercases_plate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Motorcycle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = MotorcycleService::new(db);

    let motorcycle = service.create(param("abc-1234", 2022, "-E")).await?;

    assert_eq!(motorcycle.plate, "ABC-1234");
    assert_eq!(motorcycle.model, MotorcycleModel::E);
    assert_eq!(service.get_by_plate("abc-1234").await?.plate, "ABC-1234");

    Ok(())
}

/// Tests the validation table for plate, year and model.
///
/// Expected: Err(AppError::BadRequest) for each invalid input
#[tokio::test]
async fn rejects_invalid_input() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Motorcycle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = MotorcycleService::new(db);

    let cases = [
        param("ABC1234", 2022, "Sport"),
        param("AB-12345", 2022, "Sport"),
        param("ABC-1234", 2019, "Sport"),
        param("ABC-1234", 2026, "Sport"),
        param("ABC-1234", 2022, "E"),
        param("ABC-1234", 2022, "sport"),
    ];

    for case in cases {
        let result = service.create(case.clone()).await;
        assert!(
            matches!(result, Err(AppError::BadRequest(_))),
            "expected BadRequest for {:?}",
            case
        );
    }

    Ok(())
}

/// Tests registering a plate twice.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_plate() -> Result<(), AppError> {
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

    let result = MotorcycleService::new(db)
        .create(param("dup-0001", 2023, "Pop"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests get and delete for an unknown plate.
///
/// Expected: Err(AppError::NotFound) for both
#[tokio::test]
async fn unknown_plate_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Motorcycle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = MotorcycleService::new(db);

    assert!(matches!(
        service.get_by_plate("ZZZ-0000").await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete("ZZZ-0000").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
