//! Shared DTOs and error mapping for the API handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use field_common::FieldError;
use session::{Session, ViewState};

/// Wrapper giving [`FieldError`] an HTTP response shape.
#[derive(Debug)]
pub struct ApiError(pub FieldError);

impl From<FieldError> for ApiError {
    fn from(err: FieldError) -> Self {
        Self(err)
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }
        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Compact session view returned by every mutating endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub view: ViewState,
    pub has_boundary: bool,
    pub has_dataset: bool,
}

impl From<&Session> for SessionSummary {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id(),
            view: session.view(),
            has_boundary: session.boundary().is_some(),
            has_dataset: session.dataset().is_some(),
        }
    }
}
