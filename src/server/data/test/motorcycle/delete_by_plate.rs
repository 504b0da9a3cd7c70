use super::*;

/// Tests deleting a registered motorcycle.
///
/// Expected: Ok(true), then Ok(false) on a second delete
#[tokio::test]
async fn deletes_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Motorcycle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::motorcycle::MotorcycleFactory::new(db)
        .plate("DEL-0001")
        .build()
        .await?;

    let repo = MotorcycleRepository::new(db);

    assert!(repo.delete_by_plate("DEL-0001").await?);
    assert!(!repo.delete_by_plate("DEL-0001").await?);

    Ok(())
}
