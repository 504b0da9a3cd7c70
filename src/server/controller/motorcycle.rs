use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        motorcycle::{CreateMotorcycleDto, MotorcycleDto},
        pagination::PageDto,
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        model::motorcycle::{CreateMotorcycleParam, Motorcycle},
        service::motorcycle::MotorcycleService,
        state::AppState,
        util::hateoas::{RequestOrigin, API_PREFIX},
    },
};

/// Tag for grouping motorcycle endpoints in OpenAPI documentation
pub static MOTORCYCLE_TAG: &str = "motorcycle";

const MOTORCYCLES_ROUTE: &str = "motorcycles";

/// Register a motorcycle.
///
/// The plate is uppercased before validation.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Plate, year and model
///
/// # Returns
/// - `201 Created` - Motorcycle registered, `Location` points at it
/// - `400 Bad Request` - Invalid plate, year or model
/// - `409 Conflict` - Plate already registered
#[utoipa::path(
    post,
    path = "/api/v1/motorcycles",
    tag = MOTORCYCLE_TAG,
    request_body = CreateMotorcycleDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Motorcycle registered", body = MotorcycleDto,
            headers(("Location" = String, description = "URI of the created motorcycle"))),
        (status = 400, description = "Invalid plate, year or model", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Plate already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_motorcycle(
    State(state): State<AppState>,
    Json(payload): Json<CreateMotorcycleDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MotorcycleService::new(&state.db);

    let motorcycle = service
        .create(CreateMotorcycleParam {
            plate: payload.plate,
            year: payload.year,
            model: payload.model,
        })
        .await?;

    let location = format!("{}/{}/{}", API_PREFIX, MOTORCYCLES_ROUTE, motorcycle.plate);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(motorcycle.into_dto()),
    ))
}

/// Get a motorcycle by plate.
///
/// # Returns
/// - `200 OK` - Motorcycle found
/// - `404 Not Found` - No motorcycle with that plate
#[utoipa::path(
    get,
    path = "/api/v1/motorcycles/{plate}",
    tag = MOTORCYCLE_TAG,
    params(("plate" = String, Path, description = "Plate, case-insensitive")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Motorcycle found", body = MotorcycleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Motorcycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_motorcycle(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = MotorcycleService::new(&state.db);

    let motorcycle = service.get_by_plate(&plate).await?;

    Ok((StatusCode::OK, Json(motorcycle.into_dto())))
}

/// List motorcycles ordered by plate.
#[utoipa::path(
    get,
    path = "/api/v1/motorcycles",
    tag = MOTORCYCLE_TAG,
    params(PaginationParam),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Page of motorcycles", body = PageDto<MotorcycleDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_motorcycles(
    State(state): State<AppState>,
    origin: RequestOrigin,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let service = MotorcycleService::new(&state.db);

    let page = service.get_all(params.into_page_request()).await?;

    Ok((
        StatusCode::OK,
        Json(page.map(Motorcycle::into_dto).into_dto(&origin, MOTORCYCLES_ROUTE)),
    ))
}

/// Delete a motorcycle by plate.
///
/// # Returns
/// - `204 No Content` - Motorcycle deleted
/// - `404 Not Found` - No motorcycle with that plate
#[utoipa::path(
    delete,
    path = "/api/v1/motorcycles/{plate}",
    tag = MOTORCYCLE_TAG,
    params(("plate" = String, Path, description = "Plate, case-insensitive")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Motorcycle deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Motorcycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_motorcycle(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = MotorcycleService::new(&state.db);

    service.delete(&plate).await?;

    Ok(StatusCode::NO_CONTENT)
}
