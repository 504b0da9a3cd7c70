//! Motorcycle fleet management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::motorcycle::MotorcycleRepository,
    error::AppError,
    model::{
        motorcycle::{CreateMotorcycleParam, Motorcycle, MotorcycleModel, NewMotorcycle},
        pagination::{Page, PageRequest},
    },
    service::conflict_on_unique_violation,
    util::validate::{is_valid_plate, is_valid_year, normalize_plate, MAX_MODEL_YEAR, MIN_MODEL_YEAR},
};

const PLATE_TAKEN: &str = "Plate already registered";

pub struct MotorcycleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MotorcycleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and registers a motorcycle.
    ///
    /// The plate is uppercased before validation, so `abc-1234` is accepted and
    /// stored as `ABC-1234`.
    ///
    /// # Arguments
    /// - `param` - Raw plate, year and model
    ///
    /// # Returns
    /// - `Ok(Motorcycle)` - Motorcycle registered
    /// - `Err(AppError::BadRequest)` - Invalid plate, year or model
    /// - `Err(AppError::Conflict)` - Plate already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateMotorcycleParam) -> Result<Motorcycle, AppError> {
        let plate = normalize_plate(&param.plate);

        if !is_valid_plate(&plate) {
            return Err(AppError::BadRequest(
                "Invalid plate, expected format AAA-9999".to_string(),
            ));
        }
        if !is_valid_year(param.year) {
            return Err(AppError::BadRequest(format!(
                "Year must be between {} and {}",
                MIN_MODEL_YEAR, MAX_MODEL_YEAR
            )));
        }
        let Some(model) = MotorcycleModel::from_wire(&param.model) else {
            return Err(AppError::BadRequest(
                "Invalid model, expected Sport, Pop or -E".to_string(),
            ));
        };

        let motorcycle_repo = MotorcycleRepository::new(self.db);

        if motorcycle_repo.exists_by_plate(&plate).await? {
            return Err(AppError::Conflict(PLATE_TAKEN.to_string()));
        }

        motorcycle_repo
            .create(NewMotorcycle {
                plate,
                year: param.year,
                model,
            })
            .await
            .map_err(|e| conflict_on_unique_violation(e, PLATE_TAKEN))
    }

    /// Gets a motorcycle by plate, ignoring case.
    ///
    /// # Returns
    /// - `Ok(Motorcycle)` - Motorcycle found
    /// - `Err(AppError::NotFound)` - No motorcycle with that plate
    pub async fn get_by_plate(&self, plate: &str) -> Result<Motorcycle, AppError> {
        let motorcycle_repo = MotorcycleRepository::new(self.db);

        motorcycle_repo
            .find_by_plate(&normalize_plate(plate))
            .await?
            .ok_or_else(|| AppError::NotFound("Motorcycle not found".to_string()))
    }

    pub async fn get_all(&self, page: PageRequest) -> Result<Page<Motorcycle>, AppError> {
        let motorcycle_repo = MotorcycleRepository::new(self.db);

        let (motorcycles, total) = motorcycle_repo.get_all_paginated(&page).await?;

        Ok(Page::new(motorcycles, page, total))
    }

    /// Deletes a motorcycle by plate, ignoring case.
    ///
    /// # Returns
    /// - `Ok(())` - Motorcycle deleted
    /// - `Err(AppError::NotFound)` - No motorcycle with that plate
    pub async fn delete(&self, plate: &str) -> Result<(), AppError> {
        let motorcycle_repo = MotorcycleRepository::new(self.db);

        if !motorcycle_repo.delete_by_plate(&normalize_plate(plate)).await? {
            return Err(AppError::NotFound("Motorcycle not found".to_string()));
        }

        Ok(())
    }
}
