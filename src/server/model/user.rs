//! User domain models and parameters.

use uuid::Uuid;

use crate::{
    model::user::UserDto,
    server::{error::AppError, util::parse::parse_uuid_from_string},
};

/// Registered account.
///
/// Carries the stored password hash so the auth service can verify logins. The hash
/// never leaves the server since `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Unique login identifier, compared case-sensitively.
    pub email: String,
    pub password_hash: String,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - Id, name and email without the password hash
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored id is not a UUID
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let id = parse_uuid_from_string(entity.id)?;

        Ok(Self {
            id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
        })
    }
}

/// Parameters for inserting a new user with an already hashed password.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub name: String,
    pub email: String,
    /// Plain text password, hashed by the auth service.
    pub password: String,
}

/// Partial update of a user's profile.
///
/// `None` leaves the field unchanged. The service also treats blank strings as `None`.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub name: Option<String>,
    /// Plain text password, hashed by the user service.
    pub password: Option<String>,
}

/// Column changes applied by the repository after the service resolved blanks and
/// hashed the password.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub password_hash: Option<String>,
}
