use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMaintenanceDto {
    /// Plate of a registered motorcycle
    #[schema(example = "ABC-1234")]
    pub plate: String,
    #[schema(example = "strange noise in the brakes")]
    pub problems: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateMaintenanceDto {
    pub problems: Option<String>,
    /// `Open` or `Completed`; other values leave the status unchanged
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MaintenanceDto {
    /// Four digit ticket id
    pub id: String,
    pub plate: String,
    pub problems: String,
    pub status: String,
    pub date: DateTime<Utc>,
}
