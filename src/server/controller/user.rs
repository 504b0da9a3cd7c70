use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        pagination::PageDto,
        user::{UpdateUserDto, UserDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        model::user::{UpdateUserParam, User},
        service::{token::Claims, user::UserService},
        state::AppState,
        util::hateoas::RequestOrigin,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

const USERS_ROUTE: &str = "users";

/// List users ordered by name.
///
/// # Returns
/// - `200 OK` - One page of users with navigation links
/// - `401 Unauthorized` - Missing or invalid bearer token
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = USER_TAG,
    params(PaginationParam),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Page of users", body = PageDto<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    origin: RequestOrigin,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let page = service.get_all_users(params.into_page_request()).await?;

    Ok((
        StatusCode::OK,
        Json(page.map(User::into_dto).into_dto(&origin, USERS_ROUTE)),
    ))
}

/// Update a user's name and/or password.
///
/// Blank or missing fields are left unchanged.
///
/// # Returns
/// - `204 No Content` - User updated
/// - `400 Bad Request` - New password shorter than 5 characters
/// - `404 Not Found` - No user with that email
#[utoipa::path(
    put,
    path = "/api/v1/users/{email}",
    tag = USER_TAG,
    params(("email" = String, Path, description = "User email")),
    request_body = UpdateUserDto,
    security(("bearer" = [])),
    responses(
        (status = 204, description = "User updated"),
        (status = 400, description = "Invalid password", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    service
        .update_user(
            &email,
            UpdateUserParam {
                name: payload.name,
                password: payload.password,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user.
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `404 Not Found` - No user with that email
#[utoipa::path(
    delete,
    path = "/api/v1/users/{email}",
    tag = USER_TAG,
    params(("email" = String, Path, description = "User email")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted_by = claims.user_id()?;
    let service = UserService::new(&state.db);

    service.delete_user(&email).await?;

    tracing::info!("User {} deleted by {} ({})", email, claims.sub, deleted_by);

    Ok(StatusCode::NO_CONTENT)
}
