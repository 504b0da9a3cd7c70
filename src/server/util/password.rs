//! Argon2id password hashing.
//!
//! Hashing is CPU bound, so both operations run on the blocking thread pool instead of
//! stalling the async runtime.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a password with a fresh random salt.
///
/// # Arguments
/// - `password` - Plain text password
///
/// # Returns
/// - `Ok(String)` - PHC formatted argon2id hash
/// - `Err(AppError::InternalErr)` - Hashing failed or the blocking task was cancelled
pub async fn hash_password(password: String) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| InternalError::PasswordHash(e.to_string()))
    })
    .await
    .map_err(InternalError::from)??;

    Ok(hash)
}

/// Checks a password against a stored hash.
///
/// # Arguments
/// - `password` - Plain text password supplied by the client
/// - `hash` - Stored PHC formatted hash
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::InternalErr)` - Stored hash is unparseable or the blocking task failed
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || {
        let parsed_hash =
            PasswordHash::new(&hash).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

        Ok::<bool, InternalError>(
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok(),
        )
    })
    .await
    .map_err(InternalError::from)??;

    Ok(matches)
}
