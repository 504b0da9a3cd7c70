//! Maintenance ticket management.
//!
//! Tickets get a random four digit id. Ids are drawn until an insert succeeds, with a
//! bounded number of attempts so a full id space fails instead of spinning.

use chrono::Utc;
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{maintenance::MaintenanceRepository, motorcycle::MotorcycleRepository},
    error::AppError,
    model::{
        maintenance::{
            CreateMaintenanceParam, Maintenance, MaintenanceStatus, UpdateMaintenanceParam,
        },
        pagination::{Page, PageRequest},
    },
    service::is_unique_violation,
    util::validate::normalize_plate,
};

/// Attempts at drawing an unused id before giving up.
const MAX_ID_ATTEMPTS: usize = 1_000;

/// Draws a random id in `0000..=9999`.
fn random_ticket_id() -> String {
    format!("{:04}", rand::rng().random_range(0..10_000u32))
}

pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a ticket for a registered motorcycle.
    ///
    /// # Arguments
    /// - `param` - Plate (any case) and problem description
    ///
    /// # Returns
    /// - `Ok(Maintenance)` - Ticket created with status `Open`
    /// - `Err(AppError::BadRequest)` - No motorcycle has that plate
    /// - `Err(AppError::InternalError)` - No unused id found
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateMaintenanceParam) -> Result<Maintenance, AppError> {
        self.create_with_ids(param, random_ticket_id).await
    }

    /// Opens a ticket, drawing ids from `next_id` until an insert succeeds.
    ///
    /// A draw that collides with an existing ticket, including one inserted
    /// concurrently by another request, fails the primary key and is retried.
    pub(super) async fn create_with_ids(
        &self,
        param: CreateMaintenanceParam,
        mut next_id: impl FnMut() -> String,
    ) -> Result<Maintenance, AppError> {
        let plate = normalize_plate(&param.plate);

        if !MotorcycleRepository::new(self.db)
            .exists_by_plate(&plate)
            .await?
        {
            return Err(AppError::BadRequest(
                "No motorcycle registered with this plate".to_string(),
            ));
        }

        let maintenance_repo = MaintenanceRepository::new(self.db);

        for _ in 0..MAX_ID_ATTEMPTS {
            let id = next_id();

            let result = maintenance_repo
                .create(
                    id.clone(),
                    CreateMaintenanceParam {
                        plate: plate.clone(),
                        problems: param.problems.clone(),
                    },
                    Utc::now(),
                )
                .await;

            match result {
                Err(err) if is_unique_violation(&err) => {
                    tracing::debug!("Maintenance id {} already taken, drawing another", id);
                }
                result => return result,
            }
        }

        Err(AppError::InternalError(format!(
            "No unused maintenance id after {} attempts",
            MAX_ID_ATTEMPTS
        )))
    }

    /// Gets a ticket by id.
    ///
    /// # Returns
    /// - `Ok(Maintenance)` - Ticket found
    /// - `Err(AppError::NotFound)` - No ticket with that id
    pub async fn get_by_id(&self, id: &str) -> Result<Maintenance, AppError> {
        MaintenanceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Maintenance not found".to_string()))
    }

    /// Lists tickets newest first.
    ///
    /// # Arguments
    /// - `status` - Raw status filter. Parsed case-insensitively, ignored when unknown.
    /// - `page` - Normalized page request
    ///
    /// # Returns
    /// - `Ok(Page<Maintenance>)` - Tickets with page metadata
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_all(
        &self,
        status: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<Maintenance>, AppError> {
        let status = status.and_then(MaintenanceStatus::parse);

        let (tickets, total) = MaintenanceRepository::new(self.db)
            .get_paginated(status, &page)
            .await?;

        Ok(Page::new(tickets, page, total))
    }

    /// Updates a ticket's problems and/or status.
    ///
    /// # Arguments
    /// - `id` - Ticket id
    /// - `problems` - New description, `None` keeps the current one
    /// - `status` - Raw status name. Unknown names leave the status unchanged.
    ///
    /// # Returns
    /// - `Ok(Maintenance)` - The updated ticket
    /// - `Err(AppError::NotFound)` - No ticket with that id
    pub async fn update(
        &self,
        id: &str,
        problems: Option<String>,
        status: Option<&str>,
    ) -> Result<Maintenance, AppError> {
        let parsed_status = status.and_then(MaintenanceStatus::parse);
        if let (Some(raw), None) = (status, parsed_status) {
            tracing::debug!("Ignoring unknown maintenance status '{}'", raw);
        }

        MaintenanceRepository::new(self.db)
            .update(
                id,
                UpdateMaintenanceParam {
                    problems,
                    status: parsed_status,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Maintenance not found".to_string()))
    }

    /// Deletes a ticket by id.
    ///
    /// # Returns
    /// - `Ok(())` - Ticket deleted
    /// - `Err(AppError::NotFound)` - No ticket with that id
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !MaintenanceRepository::new(self.db).delete_by_id(id).await? {
            return Err(AppError::NotFound("Maintenance not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_ids_are_four_digits() {
        for _ in 0..200 {
            let id = random_ticket_id();
            assert_eq!(id.len(), 4);
            assert!(id.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
