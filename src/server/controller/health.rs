use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{model::api::HealthDto, server::state::AppState};

/// Tag for grouping operational endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Report whether the service can reach its database.
///
/// # Returns
/// - `200 OK` - `{"status": "Healthy"}`
/// - `503 Service Unavailable` - `{"status": "Unhealthy"}`
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Database reachable", body = HealthDto),
        (status = 503, description = "Database unreachable", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthDto {
                status: "Healthy".to_string(),
            }),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthDto {
                    status: "Unhealthy".to_string(),
                }),
            )
        }
    }
}
