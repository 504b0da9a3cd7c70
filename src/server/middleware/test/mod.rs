use axum::http::{header, HeaderMap, HeaderValue};
use uuid::Uuid;

use crate::server::{
    config::JwtConfig,
    error::auth::AuthError,
    middleware::auth::AuthGuard,
    model::user::User,
    service::token::TokenService,
};


const SECRET: &str = "middleware-test-secret-with-32-plus-bytes";

fn token_service(secret: &str) -> TokenService {
    TokenService::new(&JwtConfig::new(secret).unwrap())
}

fn user() -> User {
    User {
        id: Uuid::new_v4(),
        name: "Guard User".to_string(),
        email: "guard@email.com".to_string(),
        password_hash: String::new(),
    }
}

fn headers_with_authorization(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}
