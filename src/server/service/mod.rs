//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation rules and normalization of client input
//! - **Orchestration**: Coordinating repository calls, hashing and token issuing
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

use sea_orm::SqlErr;

use crate::server::error::AppError;

pub mod auth;
pub mod maintenance;
pub mod motorcycle;
pub mod prediction;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;

/// Maps a unique constraint violation to `AppError::Conflict`.
///
/// Covers the window between an existence check and the insert, where a concurrent
/// request may have claimed the same key.
fn conflict_on_unique_violation(err: AppError, message: &str) -> AppError {
    if is_unique_violation(&err) {
        return AppError::Conflict(message.to_string());
    }

    err
}

/// Whether the error is a database unique or primary key constraint violation.
fn is_unique_violation(err: &AppError) -> bool {
    match err {
        AppError::DbErr(db_err) => {
            matches!(db_err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
        }
        _ => false,
    }
}
