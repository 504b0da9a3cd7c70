//! HTTP request handlers.
//!
//! Controllers convert DTOs into service parameters, call the service layer and convert
//! domain models back into DTOs. Every handler carries a `#[utoipa::path]` annotation
//! so the router can assemble the OpenAPI document from the registered routes.

pub mod auth;
pub mod health;
pub mod maintenance;
pub mod motorcycle;
pub mod param;
pub mod prediction;
pub mod user;

#[cfg(test)]
mod test;
