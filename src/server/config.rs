//! Environment-based application configuration.
//!
//! The configuration is read once at startup by the composition root and passed by
//! value or reference to whatever needs it. Nothing reads the environment after
//! `Config::from_env` returns.

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Fixed issuer and audience embedded in every token.
pub const JWT_ISSUER: &str = "mottu";

/// HS256 keys shorter than the hash output weaken the MAC.
pub const MIN_JWT_SECRET_BYTES: usize = 32;

/// Signing material and claim constants for bearer tokens.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
}

impl JwtConfig {
    /// Builds a token configuration with the fixed service issuer and audience.
    ///
    /// # Arguments
    /// - `secret` - Shared HMAC secret, at least 32 bytes
    ///
    /// # Returns
    /// - `Ok(JwtConfig)` - Secret accepted
    /// - `Err(ConfigError::MissingEnvVar)` - Secret is empty
    /// - `Err(ConfigError::InvalidEnvVar)` - Secret is shorter than 32 bytes
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();

        if secret.is_empty() {
            return Err(ConfigError::MissingEnvVar("JWT_SECRET".to_string()));
        }

        if secret.len() < MIN_JWT_SECRET_BYTES {
            return Err(ConfigError::InvalidEnvVar {
                name: "JWT_SECRET".to_string(),
                reason: format!("must be at least {} bytes", MIN_JWT_SECRET_BYTES),
            });
        }

        Ok(Self {
            secret,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_ISSUER.to_string(),
        })
    }
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt: JwtConfig,

    /// Whether `main` should train and register the maintenance status classifier.
    pub status_classifier_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
        let jwt_secret = std::env::var("JWT_SECRET")
            .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?;
        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let status_classifier_enabled = match std::env::var("STATUS_CLASSIFIER_ENABLED") {
            Ok(value) => parse_bool("STATUS_CLASSIFIER_ENABLED", &value)?,
            Err(_) => true,
        };

        Ok(Self {
            database_url,
            bind_address,
            jwt: JwtConfig::new(jwt_secret)?,
            status_classifier_enabled,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("expected a boolean, got '{}'", value),
        }),
    }
}
