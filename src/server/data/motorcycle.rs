//! Motorcycle data repository for database operations.

use crate::server::{
    error::AppError,
    model::{
        motorcycle::{Motorcycle, NewMotorcycle},
        pagination::PageRequest,
    },
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for the motorcycle fleet.
///
/// Plates are expected to be normalized to uppercase by the caller.
pub struct MotorcycleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MotorcycleRepository<'a> {
    /// Creates a new MotorcycleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MotorcycleRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a validated motorcycle.
    ///
    /// # Arguments
    /// - `motorcycle` - Normalized plate, year and model
    ///
    /// # Returns
    /// - `Ok(Motorcycle)` - The created motorcycle with its generated id
    /// - `Err(AppError::DbErr)` - Insert failed, including unique plate violations
    pub async fn create(&self, motorcycle: NewMotorcycle) -> Result<Motorcycle, AppError> {
        let entity = entity::motorcycle::ActiveModel {
            plate: ActiveValue::Set(motorcycle.plate),
            year: ActiveValue::Set(motorcycle.year),
            model: ActiveValue::Set(motorcycle.model.as_stored().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Motorcycle::from_entity(entity)
    }

    /// Finds a motorcycle by plate.
    ///
    /// # Returns
    /// - `Ok(Some(Motorcycle))` - Motorcycle found
    /// - `Ok(None)` - No motorcycle with that plate
    /// - `Err(AppError)` - Database error or unknown stored model
    pub async fn find_by_plate(&self, plate: &str) -> Result<Option<Motorcycle>, AppError> {
        let entity = entity::prelude::Motorcycle::find()
            .filter(entity::motorcycle::Column::Plate.eq(plate))
            .one(self.db)
            .await?;

        entity.map(Motorcycle::from_entity).transpose()
    }

    pub async fn exists_by_plate(&self, plate: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Motorcycle::find()
            .filter(entity::motorcycle::Column::Plate.eq(plate))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets one page of motorcycles ordered by plate.
    ///
    /// # Arguments
    /// - `page` - Normalized page request
    ///
    /// # Returns
    /// - `Ok((motorcycles, total))` - Motorcycles on the requested page and total count
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: &PageRequest,
    ) -> Result<(Vec<Motorcycle>, u64), AppError> {
        let paginator = entity::prelude::Motorcycle::find()
            .order_by_asc(entity::motorcycle::Column::Plate)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let entities = if page.starts_within(total) {
            paginator.fetch_page(page.index()).await?
        } else {
            Vec::new()
        };
        let motorcycles = entities
            .into_iter()
            .map(Motorcycle::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((motorcycles, total))
    }

    /// Deletes the motorcycle with this plate.
    ///
    /// Maintenance tickets referencing the plate are left in place.
    ///
    /// # Returns
    /// - `Ok(true)` - Motorcycle deleted
    /// - `Ok(false)` - No motorcycle with that plate
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_plate(&self, plate: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Motorcycle::delete_many()
            .filter(entity::motorcycle::Column::Plate.eq(plate))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
