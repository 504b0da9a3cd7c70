//! User service for business logic.
//!
//! This module provides the `UserService` for listing, updating and deleting accounts.
//! Blank update fields are treated as absent, and new passwords are validated and
//! hashed before reaching the repository.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        pagination::{Page, PageRequest},
        user::{UpdateUserParam, User, UserChanges},
    },
    util::{
        password::hash_password,
        validate::{is_valid_password, MIN_PASSWORD_LEN},
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves one page of users ordered by name.
    ///
    /// # Arguments
    /// - `page` - Normalized page request
    ///
    /// # Returns
    /// - `Ok(Page<User>)` - Users with page metadata
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_all_users(&self, page: PageRequest) -> Result<Page<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (users, total) = user_repo.get_all_paginated(&page).await?;

        Ok(Page::new(users, page, total))
    }

    /// Updates a user's name and/or password.
    ///
    /// # Arguments
    /// - `email` - Email of the user to update
    /// - `param` - New values, blank or missing fields are ignored
    ///
    /// # Returns
    /// - `Ok(())` - User updated (or nothing to change)
    /// - `Err(AppError::BadRequest)` - New password is too short
    /// - `Err(AppError::NotFound)` - No user with that email
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn update_user(&self, email: &str, param: UpdateUserParam) -> Result<(), AppError> {
        let name = param.name.filter(|n| !n.trim().is_empty());
        let password = param.password.filter(|p| !p.trim().is_empty());

        let password_hash = match password {
            Some(password) => {
                if !is_valid_password(&password) {
                    return Err(AppError::BadRequest(format!(
                        "Password must be at least {} characters",
                        MIN_PASSWORD_LEN
                    )));
                }
                Some(hash_password(password).await?)
            }
            None => None,
        };

        let user_repo = UserRepository::new(self.db);

        user_repo
            .update(
                email,
                UserChanges {
                    name,
                    password_hash,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(())
    }

    /// Deletes a user by email.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that email
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_user(&self, email: &str) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if !user_repo.delete_by_email(email).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
