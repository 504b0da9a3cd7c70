//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let motorcycle = factory::create_motorcycle(&db).await?;
//! let ticket = factory::create_maintenance(&db, &motorcycle.plate).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let motorcycle = factory::motorcycle::MotorcycleFactory::new(&db)
//!     .plate("ABC-1234")
//!     .year(2022)
//!     .model("Sport")
//!     .build()
//!     .await?;
//! ```
//!
//! Factories write rows directly and bypass application validation, so they can also
//! seed values the API would reject.

pub mod helpers;
pub mod maintenance;
pub mod motorcycle;
pub mod user;

pub use maintenance::create_maintenance;
pub use motorcycle::create_motorcycle;
pub use user::create_user;
