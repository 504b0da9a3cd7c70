//! Motorcycle domain models and parameters.

use crate::{
    model::motorcycle::MotorcycleDto,
    server::error::{internal::InternalError, AppError},
};

/// Fleet motorcycle model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorcycleModel {
    Sport,
    Pop,
    /// Electric model, written `-E` on the wire and `E` in storage.
    E,
}

impl MotorcycleModel {
    /// Parses the API form. Matching is exact: `Sport`, `Pop` or `-E`.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Sport" => Some(Self::Sport),
            "Pop" => Some(Self::Pop),
            "-E" => Some(Self::E),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Sport => "Sport",
            Self::Pop => "Pop",
            Self::E => "-E",
        }
    }

    pub fn as_stored(&self) -> &'static str {
        match self {
            Self::Sport => "Sport",
            Self::Pop => "Pop",
            Self::E => "E",
        }
    }

    /// Parses the stored form.
    ///
    /// # Returns
    /// - `Ok(MotorcycleModel)` - Known stored value
    /// - `Err(InternalError::UnknownStoredValue)` - Row was written outside the application
    pub fn from_stored(value: &str) -> Result<Self, InternalError> {
        match value {
            "Sport" => Ok(Self::Sport),
            "Pop" => Ok(Self::Pop),
            "E" => Ok(Self::E),
            _ => Err(InternalError::UnknownStoredValue {
                kind: "motorcycle model",
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Motorcycle {
    pub id: i32,
    /// Uppercase `AAA-9999` plate.
    pub plate: String,
    pub year: i32,
    pub model: MotorcycleModel,
}

impl Motorcycle {
    /// Converts the motorcycle to its API representation with the wire model name.
    pub fn into_dto(self) -> MotorcycleDto {
        MotorcycleDto {
            plate: self.plate,
            year: self.year,
            model: self.model.as_wire().to_string(),
        }
    }

    /// Converts an entity model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Motorcycle)` - The converted domain model
    /// - `Err(AppError::InternalErr(UnknownStoredValue))` - Stored model is not recognized
    pub fn from_entity(entity: entity::motorcycle::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            plate: entity.plate,
            year: entity.year,
            model: MotorcycleModel::from_stored(&entity.model)?,
        })
    }
}

/// Raw motorcycle registration input, validated by the motorcycle service.
#[derive(Debug, Clone)]
pub struct CreateMotorcycleParam {
    pub plate: String,
    pub year: i32,
    pub model: String,
}

/// Validated registration ready for insertion.
#[derive(Debug, Clone)]
pub struct NewMotorcycle {
    pub plate: String,
    pub year: i32,
    pub model: MotorcycleModel,
}
