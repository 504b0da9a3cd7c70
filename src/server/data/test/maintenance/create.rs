use super::*;

/// Tests opening a ticket.
///
/// Verifies that new tickets start as `Open` and can be found by id.
///
/// Expected: Ok(Maintenance) with status Open
#[tokio::test]
async fn creates_open_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Maintenance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MaintenanceRepository::new(db);
    let ticket = repo
        .create(
            "0042".to_string(),
            CreateMaintenanceParam {
                plate: "ABC-1234".to_string(),
                problems: "flat tire".to_string(),
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(ticket.status, MaintenanceStatus::Open);
    assert_eq!(repo.find_by_id("0042").await?.unwrap().problems, "flat tire");

    Ok(())
}

/// Tests inserting a duplicate id.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_on_duplicate_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Maintenance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::maintenance::MaintenanceFactory::new(db, "ABC-1234")
        .id("1111")
        .build()
        .await?;

    let repo = MaintenanceRepository::new(db);
    let result = repo
        .create(
            "1111".to_string(),
            CreateMaintenanceParam {
                plate: "ABC-1234".to_string(),
                problems: "oil change".to_string(),
            },
            Utc::now(),
        )
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
