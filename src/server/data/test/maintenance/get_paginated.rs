use super::*;

/// Tests listing tickets newest first.
///
/// Expected: Ok((tickets, 3)) ordered by date descending
#[tokio::test]
async fn lists_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Maintenance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for (id, age_hours) in [("0001", 3), ("0002", 1), ("0003", 2)] {
        factory::maintenance::MaintenanceFactory::new(db, "ABC-1234")
            .id(id)
            .date(now - Duration::hours(age_hours))
            .build()
            .await?;
    }

    let repo = MaintenanceRepository::new(db);
    let (tickets, total) = repo
        .get_paginated(None, &PageRequest::default())
        .await?;

    assert_eq!(total, 3);
    assert_eq!(
        tickets.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
        vec!["0002", "0003", "0001"]
    );

    Ok(())
}

/// Tests filtering by status.
///
/// Verifies that the total only counts matching tickets.
///
/// Expected: Ok((completed tickets, 1))
#[tokio::test]
async fn filters_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Maintenance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::maintenance::MaintenanceFactory::new(db, "ABC-1234")
        .id("0001")
        .build()
        .await?;
    factory::maintenance::MaintenanceFactory::new(db, "ABC-1234")
        .id("0002")
        .status("Completed")
        .build()
        .await?;

    let repo = MaintenanceRepository::new(db);

    let (completed, total) = repo
        .get_paginated(Some(MaintenanceStatus::Completed), &PageRequest::default())
        .await?;
    assert_eq!(total, 1);
    assert_eq!(completed[0].id, "0002");

    let (open, total) = repo
        .get_paginated(Some(MaintenanceStatus::Open), &PageRequest::default())
        .await?;
    assert_eq!(total, 1);
    assert_eq!(open[0].id, "0001");

    Ok(())
}
