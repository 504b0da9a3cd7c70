//! Helpers shared by services and controllers.

pub mod hateoas;
pub mod parse;
pub mod password;
pub mod validate;
