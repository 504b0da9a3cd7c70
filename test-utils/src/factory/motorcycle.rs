//! Motorcycle factory for creating test motorcycle entities.

use crate::factory::helpers::{next_id, plate_for};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test motorcycles with customizable fields.
///
/// `model` is written as-is, so pass the stored form (`Sport`, `Pop` or `E`).
pub struct MotorcycleFactory<'a> {
    db: &'a DatabaseConnection,
    plate: String,
    year: i32,
    model: String,
}

impl<'a> MotorcycleFactory<'a> {
    /// Creates a new MotorcycleFactory with default values.
    ///
    /// Defaults:
    /// - plate: unique `AAA-9999` plate
    /// - year: `2022`
    /// - model: `"Sport"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            plate: plate_for(next_id()),
            year: 2022,
            model: "Sport".to_string(),
        }
    }

    pub fn plate(mut self, plate: impl Into<String>) -> Self {
        self.plate = plate.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Builds and inserts the motorcycle entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::motorcycle::Model)` - Created motorcycle entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::motorcycle::Model, DbErr> {
        entity::motorcycle::ActiveModel {
            plate: ActiveValue::Set(self.plate),
            year: ActiveValue::Set(self.year),
            model: ActiveValue::Set(self.model),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a motorcycle with default values.
pub async fn create_motorcycle(
    db: &DatabaseConnection,
) -> Result<entity::motorcycle::Model, DbErr> {
    MotorcycleFactory::new(db).build().await
}
