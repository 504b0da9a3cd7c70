//! Maintenance factory for creating test maintenance tickets.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test maintenance tickets with customizable fields.
///
/// The plate is not checked against the motorcycle table.
pub struct MaintenanceFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    plate: String,
    problems: String,
    date: DateTime<Utc>,
    status: String,
}

impl<'a> MaintenanceFactory<'a> {
    /// Creates a new MaintenanceFactory with default values.
    ///
    /// Defaults:
    /// - id: four digit id derived from the shared counter
    /// - problems: `"strange noise in the brakes"`
    /// - date: now
    /// - status: `"Open"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `plate` - Plate the ticket belongs to
    pub fn new(db: &'a DatabaseConnection, plate: impl Into<String>) -> Self {
        Self {
            db,
            id: format!("{:04}", next_id() % 10_000),
            plate: plate.into(),
            problems: "strange noise in the brakes".to_string(),
            date: Utc::now(),
            status: "Open".to_string(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn problems(mut self, problems: impl Into<String>) -> Self {
        self.problems = problems.into();
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the maintenance entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::maintenance::Model)` - Created maintenance entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::maintenance::Model, DbErr> {
        entity::maintenance::ActiveModel {
            id: ActiveValue::Set(self.id),
            plate: ActiveValue::Set(self.plate),
            problems: ActiveValue::Set(self.problems),
            date: ActiveValue::Set(self.date),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open maintenance ticket for the given plate.
pub async fn create_maintenance(
    db: &DatabaseConnection,
    plate: &str,
) -> Result<entity::maintenance::Model, DbErr> {
    MaintenanceFactory::new(db, plate).build().await
}
