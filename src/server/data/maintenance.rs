//! Maintenance ticket data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        maintenance::{
            CreateMaintenanceParam, Maintenance, MaintenanceStatus, UpdateMaintenanceParam,
        },
        pagination::PageRequest,
    },
};

/// Repository providing database operations for maintenance tickets.
pub struct MaintenanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceRepository<'a> {
    /// Creates a new MaintenanceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MaintenanceRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new open ticket.
    ///
    /// # Arguments
    /// - `id` - Unused four digit id chosen by the service
    /// - `param` - Plate and problem description
    /// - `date` - Creation timestamp
    ///
    /// # Returns
    /// - `Ok(Maintenance)` - The created ticket with status `Open`
    /// - `Err(AppError::DbErr)` - Insert failed, including duplicate ids
    pub async fn create(
        &self,
        id: String,
        param: CreateMaintenanceParam,
        date: DateTime<Utc>,
    ) -> Result<Maintenance, AppError> {
        let entity = entity::maintenance::ActiveModel {
            id: ActiveValue::Set(id),
            plate: ActiveValue::Set(param.plate),
            problems: ActiveValue::Set(param.problems),
            date: ActiveValue::Set(date),
            status: ActiveValue::Set(MaintenanceStatus::Open.as_str().to_string()),
        }
        .insert(self.db)
        .await?;

        Maintenance::from_entity(entity)
    }

    /// Finds a ticket by id.
    ///
    /// # Returns
    /// - `Ok(Some(Maintenance))` - Ticket found
    /// - `Ok(None)` - No ticket with that id
    /// - `Err(AppError)` - Database error or unknown stored status
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Maintenance>, AppError> {
        let entity = entity::prelude::Maintenance::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        entity.map(Maintenance::from_entity).transpose()
    }

    /// Gets one page of tickets, newest first, optionally filtered by status.
    ///
    /// # Arguments
    /// - `status` - Only return tickets in this status when `Some`
    /// - `page` - Normalized page request
    ///
    /// # Returns
    /// - `Ok((tickets, total))` - Tickets on the requested page and total matching count
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        status: Option<MaintenanceStatus>,
        page: &PageRequest,
    ) -> Result<(Vec<Maintenance>, u64), AppError> {
        let mut query = entity::prelude::Maintenance::find();
        if let Some(status) = status {
            query = query.filter(entity::maintenance::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::maintenance::Column::Date)
            .order_by_asc(entity::maintenance::Column::Id)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let entities = if page.starts_within(total) {
            paginator.fetch_page(page.index()).await?
        } else {
            Vec::new()
        };
        let tickets = entities
            .into_iter()
            .map(Maintenance::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((tickets, total))
    }

    /// Applies a partial update to a ticket.
    ///
    /// # Arguments
    /// - `id` - Ticket id
    /// - `param` - Fields to overwrite, `None` fields are left untouched
    ///
    /// # Returns
    /// - `Ok(Some(Maintenance))` - The updated ticket
    /// - `Ok(None)` - No ticket with that id
    /// - `Err(AppError)` - Database error during lookup or update
    pub async fn update(
        &self,
        id: &str,
        param: UpdateMaintenanceParam,
    ) -> Result<Option<Maintenance>, AppError> {
        let Some(entity) = entity::prelude::Maintenance::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if param.problems.is_none() && param.status.is_none() {
            return Ok(Some(Maintenance::from_entity(entity)?));
        }

        let mut active_model = entity.into_active_model();
        if let Some(problems) = param.problems {
            active_model.problems = ActiveValue::Set(problems);
        }
        if let Some(status) = param.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Maintenance::from_entity(entity)?))
    }

    /// Deletes the ticket with this id.
    ///
    /// # Returns
    /// - `Ok(true)` - Ticket deleted
    /// - `Ok(false)` - No ticket with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Maintenance::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
