//! Mottu Test Utils
//!
//! Shared testing utilities for the mottu backend. Provides a builder for test contexts
//! backed by in-memory SQLite databases plus factories for inserting users, motorcycles
//! and maintenance tickets with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories for seeding test data
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Motorcycle;
//!
//! #[tokio::test]
//! async fn test_motorcycle_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Motorcycle)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
