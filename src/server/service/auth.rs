//! Account registration and login.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, RegisterParam, User},
    service::{conflict_on_unique_violation, token::TokenService},
    util::{
        password::{hash_password, verify_password},
        validate::{is_valid_email, is_valid_password, MIN_PASSWORD_LEN},
    },
};

const EMAIL_TAKEN: &str = "Email already registered";

/// Service issuing bearer tokens for new and returning users.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Shared token service used to sign tokens
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account and signs a token for it.
    ///
    /// # Arguments
    /// - `param` - Name, email and plain text password
    ///
    /// # Returns
    /// - `Ok((token, User))` - Account created
    /// - `Err(AppError::BadRequest)` - Email lacks `@` or password is too short
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError)` - Hashing, database or signing failure
    pub async fn register(&self, param: RegisterParam) -> Result<(String, User), AppError> {
        if !is_valid_email(&param.email) {
            return Err(AppError::BadRequest("Invalid email".to_string()));
        }
        if !is_valid_password(&param.password) {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.exists_by_email(&param.email).await? {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let password_hash = hash_password(param.password).await?;

        let user = user_repo
            .create(CreateUserParam {
                name: param.name,
                email: param.email,
                password_hash,
            })
            .await
            .map_err(|e| conflict_on_unique_violation(e, EMAIL_TAKEN))?;

        tracing::info!("Registered user {}", user.email);

        let token = self.tokens.generate(&user)?;

        Ok((token, user))
    }

    /// Checks credentials and signs a token.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Arguments
    /// - `email` - Account email, matched exactly
    /// - `password` - Plain text password
    ///
    /// # Returns
    /// - `Ok((token, User))` - Credentials accepted
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError)` - Database, hash parsing or signing failure
    pub async fn login(&self, email: &str, password: String) -> Result<(String, User), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.generate(&user)?;

        Ok((token, user))
    }
}
