//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles creation, lookups by email, paged listing, partial updates and deletes,
//! converting between entity models and domain models at the infrastructure boundary.

use crate::server::{
    error::AppError,
    model::{
        pagination::PageRequest,
        user::{CreateUserParam, User, UserChanges},
    },
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with a freshly generated UUID v4 id.
    ///
    /// # Arguments
    /// - `param` - Name, email and password hash
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DbErr)` - Insert failed, including unique email violations
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by exact email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(AppError)` - Database error or unparseable stored id
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts all users. Used by startup seeding to detect an empty database.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Gets one page of users ordered alphabetically by name.
    ///
    /// # Arguments
    /// - `page` - Normalized page request
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users on the requested page and total user count
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_all_paginated(&self, page: &PageRequest) -> Result<(Vec<User>, u64), AppError> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Email)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let entities = if page.starts_within(total) {
            paginator.fetch_page(page.index()).await?
        } else {
            Vec::new()
        };
        let users = entities
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    /// Applies the given column changes to the user with this email.
    ///
    /// # Arguments
    /// - `email` - Email of the user to update
    /// - `changes` - Columns to overwrite, `None` fields are left untouched
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that email
    /// - `Err(AppError)` - Database error during lookup or update
    pub async fn update(&self, email: &str, changes: UserChanges) -> Result<Option<User>, AppError> {
        let Some(entity) = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if changes.name.is_none() && changes.password_hash.is_none() {
            return Ok(Some(User::from_entity(entity)?));
        }

        let mut active_model = entity.into_active_model();
        if let Some(name) = changes.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(password_hash) = changes.password_hash {
            active_model.password_hash = ActiveValue::Set(password_hash);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)?))
    }

    /// Deletes the user with this email.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that email
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_many()
            .filter(entity::user::Column::Email.eq(email))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
