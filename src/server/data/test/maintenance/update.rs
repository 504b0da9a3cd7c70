use super::*;

/// Tests completing a ticket.
///
/// Verifies that the problems text is kept when only the status changes.
///
/// Expected: Ok(Some(Maintenance)) with status Completed
#[tokio::test]
async fn updates_status_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Maintenance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::maintenance::MaintenanceFactory::new(db, "ABC-1234")
        .id("0007")
        .problems("chain adjustment")
        .build()
        .await?;

    let repo = MaintenanceRepository::new(db);
    let ticket = repo
        .update(
            "0007",
            UpdateMaintenanceParam {
                problems: None,
                status: Some(MaintenanceStatus::Completed),
            },
        )
        .await?
        .unwrap();

    assert_eq!(ticket.status, MaintenanceStatus::Completed);
    assert_eq!(ticket.problems, "chain adjustment");

    Ok(())
}

/// Tests updating an unknown ticket.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Maintenance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MaintenanceRepository::new(db);
    let result = repo
        .update(
            "9999",
            UpdateMaintenanceParam {
                problems: Some("anything".to_string()),
                status: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
