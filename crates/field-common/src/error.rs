//! Error types for field-insight services.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias using FieldError.
pub type FieldResult<T> = Result<T, FieldError>;

/// Primary error type for field-analysis operations.
#[derive(Debug, Error)]
pub enum FieldError {
    // === Boundary Errors ===
    #[error("Boundary ring is not closed: first and last vertex must be equal")]
    BoundaryRingNotClosed,

    #[error("Boundary has {distinct} distinct vertices, at least 3 are required")]
    BoundaryTooSmall { distinct: usize },

    #[error("Invalid coordinate ({lon}, {lat}): longitude must be in [-180, 180] and latitude in [-90, 90]")]
    InvalidCoordinate { lon: f64, lat: f64 },

    #[error("No farm boundary has been drawn yet")]
    BoundaryMissing,

    // === Configuration Errors ===
    #[error("Invalid synthesis configuration: {0}")]
    InvalidConfig(String),

    // === Data Errors ===
    #[error("Invalid stress grid: {0}")]
    InvalidGrid(String),

    #[error("Analysis has not been run yet")]
    DatasetMissing,

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    RenderError(String),

    // === Session Errors ===
    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),

    // === Infrastructure Errors ===
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl FieldError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            FieldError::BoundaryRingNotClosed
            | FieldError::BoundaryTooSmall { .. }
            | FieldError::InvalidCoordinate { .. }
            | FieldError::InvalidConfig(_) => 400,

            FieldError::SessionNotFound(_) => 404,

            // Actions attempted in the wrong session state
            FieldError::BoundaryMissing | FieldError::DatasetMissing => 409,

            _ => 500,
        }
    }
}

// Conversion from common error types
impl From<serde_json::Error> for FieldError {
    fn from(err: serde_json::Error) -> Self {
        FieldError::InternalError(format!("JSON error: {}", err))
    }
}
