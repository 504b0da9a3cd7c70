use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PredictStatusDto {
    #[schema(example = "engine failing on cold start")]
    pub problems: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StatusPredictionDto {
    pub status: String,
}
