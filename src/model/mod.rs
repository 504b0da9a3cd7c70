//! Data transfer objects exchanged with API clients.
//!
//! These types define the JSON wire format of every endpoint. Server-side domain
//! models convert into them at the controller boundary.

pub mod api;
pub mod auth;
pub mod maintenance;
pub mod motorcycle;
pub mod pagination;
pub mod prediction;
pub mod user;
