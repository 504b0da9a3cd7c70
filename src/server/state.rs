//! Application state shared across all request handlers.
//!
//! `AppState` is built once in `main` and cloned into every handler through Axum's
//! state extraction. Every field is cheap to clone: the database connection is a pool
//! handle and the services sit behind `Arc`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::service::{prediction::StatusClassifier, token::TokenService};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs tokens on register/login and verifies them in the auth middleware.
    pub token_service: Arc<TokenService>,

    /// Maintenance status classifier, `None` when disabled by configuration.
    pub status_classifier: Option<Arc<StatusClassifier>>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `token_service` - Token service built from the JWT configuration
    /// - `status_classifier` - Trained classifier, or `None` to answer predictions with 503
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        token_service: Arc<TokenService>,
        status_classifier: Option<Arc<StatusClassifier>>,
    ) -> Self {
        Self {
            db,
            token_service,
            status_classifier,
        }
    }
}
