//! Bearer token authentication.
//!
//! Every protected route runs through `require_auth`, which verifies the
//! `Authorization: Bearer <token>` header and stores the token's claims as a request
//! extension for handlers that want to know who is calling.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::token::{Claims, TokenService},
    state::AppState,
};

const BEARER_SCHEME: &str = "Bearer";

/// Verifies bearer tokens against the shared token service.
pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService) -> Self {
        Self { tokens }
    }

    /// Requires a valid bearer token in the request headers.
    ///
    /// # Arguments
    /// - `headers` - Request headers
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token present and valid
    /// - `Err(AuthError::Unauthenticated)` - Header missing, not a bearer token, or token rejected
    pub fn require(&self, headers: &HeaderMap) -> Result<Claims, AuthError> {
        let Some(token) = bearer_token(headers) else {
            return Err(AuthError::Unauthenticated);
        };

        self.tokens.verify(token)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// The scheme name is matched case-insensitively.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Middleware rejecting requests without a valid bearer token.
///
/// On success the verified `Claims` are inserted into the request extensions.
///
/// # Returns
/// - `Ok(Response)` - Response of the inner handler
/// - `Err(AppError::AuthErr(Unauthenticated))` - 401 Unauthorized
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = AuthGuard::new(&state.token_service).require(request.headers())?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
