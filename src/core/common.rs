// location for defining errors and checks shared across the room model submodules

use thiserror::Error;

/// An input value that cannot describe a physical room, caught before any calculation runs.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{quantity} must be a finite number greater than zero, but {value} was given")]
    NonPositive { quantity: &'static str, value: f64 },
    #[error("{quantity} must be a finite number of zero or more, but {value} was given")]
    Negative { quantity: &'static str, value: f64 },
    #[error("{quantity} must be a finite number, but {value} was given")]
    NonFinite { quantity: &'static str, value: f64 },
    #[error("A temperature of {temperature}ºC was encountered, which is less than absolute zero")]
    BelowAbsoluteZero { temperature: f64 },
    #[error("Quantity of '{source_kind}' must be at least 1")]
    ZeroQuantity { source_kind: String },
    #[error("A cooling capacity in BTU/h is required for '{source_kind}'")]
    MissingCoolingCapacity { source_kind: String },
    #[error("A cooling capacity in BTU/h can only be given for an air conditioner, not '{source_kind}'")]
    UnexpectedCoolingCapacity { source_kind: String },
    #[error("A power in watts cannot be given for an air conditioner, give its cooling capacity in BTU/h instead")]
    UnexpectedPower,
    #[error("Wall layer of {material} needs exactly one of thickness (m) or thickness_mm (mm)")]
    AmbiguousThickness { material: String },
}

/// A key that does not name an entry in one of the fixed catalogs.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("'{key}' is not a known {catalog} key")]
pub struct UnknownCatalogKeyError {
    catalog: &'static str,
    key: String,
}

impl UnknownCatalogKeyError {
    pub(crate) fn new(catalog: &'static str, key: &str) -> Self {
        Self {
            catalog,
            key: key.to_string(),
        }
    }
}

/// Returns the value if it is finite and strictly positive.
pub(crate) fn ensure_positive(quantity: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value > 0. {
        Ok(value)
    } else {
        Err(ValidationError::NonPositive { quantity, value })
    }
}

/// Returns the value if it is finite and zero or greater.
pub(crate) fn ensure_non_negative(
    quantity: &'static str,
    value: f64,
) -> Result<f64, ValidationError> {
    if value.is_finite() && value >= 0. {
        Ok(value)
    } else {
        Err(ValidationError::Negative { quantity, value })
    }
}
