//! Bearer token issuing and verification.
//!
//! Tokens are HS256 signed JWTs valid for seven days. Verification checks the signature,
//! expiry (no clock skew allowance), issuer and audience. Every verification failure is
//! reported as `AuthError::Unauthenticated` so callers cannot distinguish an expired
//! token from a forged one.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::{config::JwtConfig, error::auth::AuthError, model::user::User};

pub const TOKEN_LIFETIME_DAYS: i64 = 7;

/// Claims carried by every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the account email.
    pub sub: String,
    /// Account id as a hyphenated UUID.
    pub uid: String,
    pub name: String,
    pub iss: String,
    pub aud: String,
    /// Issued at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    /// Parses the `uid` claim.
    ///
    /// # Returns
    /// - `Ok(Uuid)` - Account id
    /// - `Err(AuthError::Unauthenticated)` - Claim is not a UUID
    pub fn user_id(&self) -> Result<Uuid, AuthError> {
        Uuid::parse_str(&self.uid).map_err(|_| AuthError::Unauthenticated)
    }
}

/// Signs and verifies bearer tokens with a shared HMAC secret.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
}

impl TokenService {
    /// Creates a token service from validated JWT configuration.
    ///
    /// # Arguments
    /// - `config` - Secret, issuer and audience
    ///
    /// # Returns
    /// - `TokenService` - Service ready to sign and verify tokens
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "iss", "aud"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
        }
    }

    /// Issues a token for the given user, valid for seven days from now.
    ///
    /// # Arguments
    /// - `user` - Identity to embed in the token
    ///
    /// # Returns
    /// - `Ok(String)` - Compact JWS with three dot-separated segments
    /// - `Err(AuthError::InvalidIdentity)` - User has a blank email or nil id
    /// - `Err(AuthError::TokenSigning)` - Signing failed
    pub fn generate(&self, user: &User) -> Result<String, AuthError> {
        self.generate_at(user, Utc::now())
    }

    fn generate_at(&self, user: &User, issued_at: DateTime<Utc>) -> Result<String, AuthError> {
        if user.email.trim().is_empty() || user.id.is_nil() {
            return Err(AuthError::InvalidIdentity);
        }

        let claims = Claims {
            sub: user.email.clone(),
            uid: user.id.to_string(),
            name: user.name.clone(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::days(TOKEN_LIFETIME_DAYS)).timestamp(),
        };

        self.sign(&claims)
    }

    /// Verifies a compact token and returns its claims.
    ///
    /// # Arguments
    /// - `token` - Compact JWS without the `Bearer ` prefix
    ///
    /// # Returns
    /// - `Ok(Claims)` - Signature, expiry, issuer and audience all check out
    /// - `Err(AuthError::Unauthenticated)` - Any verification failure
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Rejected bearer token: {}", e);
                AuthError::Unauthenticated
            })
    }

    fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        Ok(encode(
            &Header::new(Algorithm::HS256),
            claims,
            &self.encoding_key,
        )?)
    }
}
