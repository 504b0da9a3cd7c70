use super::*;

/// Tests deleting a ticket.
///
/// Expected: Ok(true), then Ok(false) for the same id
#[tokio::test]
async fn deletes_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Maintenance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::maintenance::MaintenanceFactory::new(db, "ABC-1234")
        .id("0100")
        .build()
        .await?;

    let repo = MaintenanceRepository::new(db);

    assert!(repo.delete_by_id("0100").await?);
    assert!(!repo.delete_by_id("0100").await?);
    assert!(repo.find_by_id("0100").await?.is_none());

    Ok(())
}
