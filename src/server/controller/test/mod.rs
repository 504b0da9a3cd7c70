use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::{
    model::auth::AuthDto,
    server::{
        config::JwtConfig,
        router::router,
        service::{prediction::StatusClassifier, token::TokenService},
        state::AppState,
    },
};

mod maintenance;

const SECRET: &str = "router-test-secret-with-more-than-32-bytes";

/// Builds the full application router over a fresh in-memory database.
async fn app_with_classifier(classifier_enabled: bool) -> Router {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let token_service = Arc::new(TokenService::new(&JwtConfig::new(SECRET).unwrap()));
    let status_classifier = classifier_enabled.then(|| Arc::new(StatusClassifier::train()));

    router(AppState::new(db, token_service, status_classifier))
}

async fn app() -> Router {
    app_with_classifier(true).await
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Registers an account through the API and returns its bearer token.
async fn register(app: &Router, email: &str) -> String {
    let response = send(
        app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({ "name": "Router Rider", "email": email, "password": "secret1" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    read_json::<AuthDto>(response).await.token
}
