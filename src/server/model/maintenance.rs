//! Maintenance ticket domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::maintenance::MaintenanceDto,
    server::error::{internal::InternalError, AppError},
};

/// Lifecycle state of a maintenance ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaintenanceStatus {
    #[default]
    Open,
    Completed,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Completed => "Completed",
        }
    }

    /// Parses a status name case-insensitively.
    ///
    /// Returns `None` for unknown names so callers can ignore them.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();

        if value.eq_ignore_ascii_case("open") {
            Some(Self::Open)
        } else if value.eq_ignore_ascii_case("completed") {
            Some(Self::Completed)
        } else {
            None
        }
    }

    fn from_stored(value: &str) -> Result<Self, InternalError> {
        Self::parse(value).ok_or_else(|| InternalError::UnknownStoredValue {
            kind: "maintenance status",
            value: value.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Maintenance {
    /// Four digit ticket id.
    pub id: String,
    pub plate: String,
    pub problems: String,
    pub date: DateTime<Utc>,
    pub status: MaintenanceStatus,
}

impl Maintenance {
    pub fn into_dto(self) -> MaintenanceDto {
        MaintenanceDto {
            id: self.id,
            plate: self.plate,
            problems: self.problems,
            status: self.status.as_str().to_string(),
            date: self.date,
        }
    }

    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Maintenance)` - The converted domain model
    /// - `Err(AppError::InternalErr(UnknownStoredValue))` - Stored status is not recognized
    pub fn from_entity(entity: entity::maintenance::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            plate: entity.plate,
            problems: entity.problems,
            date: entity.date,
            status: MaintenanceStatus::from_stored(&entity.status)?,
        })
    }
}

/// Parameters for opening a maintenance ticket.
#[derive(Debug, Clone)]
pub struct CreateMaintenanceParam {
    pub plate: String,
    pub problems: String,
}

/// Partial update of a ticket. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateMaintenanceParam {
    pub problems: Option<String>,
    pub status: Option<MaintenanceStatus>,
}
