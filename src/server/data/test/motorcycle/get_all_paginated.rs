use super::*;

/// Tests paging motorcycles ordered by plate.
///
/// Expected: Ok((motorcycles, 3)) sorted by plate
#[tokio::test]
async fn pages_motorcycles_ordered_by_plate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Motorcycle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for plate in ["XYZ-0001", "ABC-1234", "MNO-5555"] {
        factory::motorcycle::MotorcycleFactory::new(db)
            .plate(plate)
            .build()
            .await?;
    }

    let repo = MotorcycleRepository::new(db);
    let (motorcycles, total) = repo
        .get_all_paginated(&PageRequest::new(Some(1), Some(10)))
        .await?;

    assert_eq!(total, 3);
    assert_eq!(
        motorcycles.iter().map(|m| m.plate.as_str()).collect::<Vec<_>>(),
        vec!["ABC-1234", "MNO-5555", "XYZ-0001"]
    );

    let (second, _) = repo
        .get_all_paginated(&PageRequest::new(Some(2), Some(2)))
        .await?;
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].plate, "XYZ-0001");

    Ok(())
}
