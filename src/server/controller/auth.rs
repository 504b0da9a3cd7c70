use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthDto, LoginDto, RegisterDto},
    },
    server::{
        error::AppError, model::user::RegisterParam, service::auth::AuthService,
        state::AppState, util::hateoas::API_PREFIX,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the account and returns a bearer token for it, so clients do not need a
/// separate login after registering.
///
/// # Arguments
/// - `state` - Application state containing the database and token service
/// - `payload` - Name, email and password
///
/// # Returns
/// - `201 Created` - Account created, `Location` points at the user
/// - `400 Bad Request` - Email lacks `@` or password shorter than 5 characters
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthDto,
            headers(("Location" = String, description = "URI of the created user"))),
        (status = 400, description = "Invalid email or password", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.token_service);

    let (token, user) = service
        .register(RegisterParam {
            name: payload.name,
            email: payload.email,
            password: payload.password,
        })
        .await?;

    let location = format!("{}/users/{}", API_PREFIX, user.email);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(AuthDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Credentials accepted, body carries a bearer token
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.token_service);

    let (token, user) = service.login(&payload.email, payload.password).await?;

    Ok((
        StatusCode::OK,
        Json(AuthDto {
            token,
            user: user.into_dto(),
        }),
    ))
}
