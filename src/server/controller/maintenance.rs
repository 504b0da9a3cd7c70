use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        maintenance::{CreateMaintenanceDto, MaintenanceDto, UpdateMaintenanceDto},
        pagination::PageDto,
    },
    server::{
        controller::param::MaintenanceListParam,
        error::AppError,
        model::{
            maintenance::{CreateMaintenanceParam, Maintenance},
            pagination::PageRequest,
        },
        service::maintenance::MaintenanceService,
        state::AppState,
        util::hateoas::{RequestOrigin, API_PREFIX},
    },
};

/// Tag for grouping maintenance endpoints in OpenAPI documentation
pub static MAINTENANCE_TAG: &str = "maintenance";

const MAINTENANCES_ROUTE: &str = "maintenances";

/// Open a maintenance ticket.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Plate of a registered motorcycle and problem description
///
/// # Returns
/// - `201 Created` - Ticket opened with a random four digit id
/// - `400 Bad Request` - No motorcycle with that plate
#[utoipa::path(
    post,
    path = "/api/v1/maintenances",
    tag = MAINTENANCE_TAG,
    request_body = CreateMaintenanceDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Ticket opened", body = MaintenanceDto,
            headers(("Location" = String, description = "URI of the created ticket"))),
        (status = 400, description = "Unknown plate", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_maintenance(
    State(state): State<AppState>,
    Json(payload): Json<CreateMaintenanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MaintenanceService::new(&state.db);

    let ticket = service
        .create(CreateMaintenanceParam {
            plate: payload.plate,
            problems: payload.problems,
        })
        .await?;

    let location = format!("{}/{}/{}", API_PREFIX, MAINTENANCES_ROUTE, ticket.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ticket.into_dto()),
    ))
}

/// Get a maintenance ticket by id.
#[utoipa::path(
    get,
    path = "/api/v1/maintenances/{id}",
    tag = MAINTENANCE_TAG,
    params(("id" = String, Path, description = "Four digit ticket id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Ticket found", body = MaintenanceDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_maintenance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = MaintenanceService::new(&state.db);

    let ticket = service.get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(ticket.into_dto())))
}

/// List maintenance tickets, newest first.
///
/// # Query Parameters
/// - `status` - Optional `Open`/`Completed` filter, case-insensitive, ignored when unknown
/// - `page`, `pageSize` - Pagination
#[utoipa::path(
    get,
    path = "/api/v1/maintenances",
    tag = MAINTENANCE_TAG,
    params(MaintenanceListParam),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Page of tickets", body = PageDto<MaintenanceDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_maintenances(
    State(state): State<AppState>,
    origin: RequestOrigin,
    Query(params): Query<MaintenanceListParam>,
) -> Result<impl IntoResponse, AppError> {
    let service = MaintenanceService::new(&state.db);

    let page = service
        .get_all(
            params.status.as_deref(),
            PageRequest::new(params.page, params.page_size),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(page.map(Maintenance::into_dto).into_dto(&origin, MAINTENANCES_ROUTE)),
    ))
}

/// Update a ticket's problems and/or status.
///
/// Unknown status names leave the status unchanged.
///
/// # Returns
/// - `200 OK` - The updated ticket
/// - `404 Not Found` - No ticket with that id
#[utoipa::path(
    put,
    path = "/api/v1/maintenances/{id}",
    tag = MAINTENANCE_TAG,
    params(("id" = String, Path, description = "Four digit ticket id")),
    request_body = UpdateMaintenanceDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Ticket updated", body = MaintenanceDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_maintenance(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateMaintenanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MaintenanceService::new(&state.db);

    let ticket = service
        .update(&id, payload.problems, payload.status.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(ticket.into_dto())))
}

/// Delete a maintenance ticket.
#[utoipa::path(
    delete,
    path = "/api/v1/maintenances/{id}",
    tag = MAINTENANCE_TAG,
    params(("id" = String, Path, description = "Four digit ticket id")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Ticket deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_maintenance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = MaintenanceService::new(&state.db);

    service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
