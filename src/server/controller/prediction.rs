use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        prediction::{PredictStatusDto, StatusPredictionDto},
    },
    server::{error::AppError, state::AppState},
};

/// Tag for grouping prediction endpoints in OpenAPI documentation
pub static PREDICTION_TAG: &str = "ml";

/// Predict whether a maintenance will end up open or completed.
///
/// # Returns
/// - `200 OK` - Predicted status, `Open` or `Completed`
/// - `503 Service Unavailable` - Classifier disabled for this deployment
#[utoipa::path(
    post,
    path = "/api/v1/ml/predict-status",
    tag = PREDICTION_TAG,
    request_body = PredictStatusDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Predicted status", body = StatusPredictionDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 503, description = "Classifier not available", body = ErrorDto)
    ),
)]
pub async fn predict_status(
    State(state): State<AppState>,
    Json(payload): Json<PredictStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let Some(classifier) = state.status_classifier.as_ref() else {
        return Err(AppError::ServiceUnavailable(
            "Status prediction is not available".to_string(),
        ));
    };

    let status = classifier.predict(&payload.problems);

    Ok((
        StatusCode::OK,
        Json(StatusPredictionDto {
            status: status.as_str().to_string(),
        }),
    ))
}
