use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMotorcycleDto {
    /// Plate in the `AAA-9999` format, case-insensitive
    #[schema(example = "DEF-5678")]
    pub plate: String,
    /// Model year between 2020 and 2025
    #[schema(example = 2023)]
    pub year: i32,
    /// One of `Sport`, `Pop` or `-E`
    #[schema(example = "Sport")]
    pub model: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MotorcycleDto {
    pub plate: String,
    pub year: i32,
    pub model: String,
}
