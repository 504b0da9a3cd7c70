//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models so the service layer never sees database types.

pub mod maintenance;
pub mod motorcycle;
pub mod user;

#[cfg(test)]
mod test;
