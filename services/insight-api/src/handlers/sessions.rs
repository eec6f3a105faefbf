//! Session lifecycle handlers.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use field_common::{AreaOfInterest, FieldError};
use session::Session;

use crate::handlers::common::{ApiError, SessionSummary};
use crate::state::AppState;

/// Drawn boundary payload: a closed GeoJSON-style ring of `[lon, lat]`
/// positions.
#[derive(Debug, Deserialize)]
pub struct BoundaryRequest {
    pub ring: Vec<[f64; 2]>,
}

/// POST /api/sessions - Start a new analysis session
#[instrument(skip(state))]
pub async fn create_session_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> (StatusCode, Json<SessionSummary>) {
    let session = Session::new();
    let summary = SessionSummary::from(&session);

    state.sessions.lock().await.insert(session.id(), session);
    info!(session = %summary.id, "Session created");

    (StatusCode::CREATED, Json(summary))
}

/// GET /api/sessions/:id - Inspect a session
#[instrument(skip(state))]
pub async fn get_session_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSummary>, ApiError> {
    let sessions = state.sessions.lock().await;
    let session = sessions.get(&id).ok_or(FieldError::SessionNotFound(id))?;
    Ok(Json(SessionSummary::from(session)))
}

/// PUT /api/sessions/:id/boundary - Submit the drawn farm boundary
#[instrument(skip(state, request))]
pub async fn set_boundary_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<BoundaryRequest>,
) -> Result<Json<SessionSummary>, ApiError> {
    let boundary = AreaOfInterest::from_positions(&request.ring)?;

    let mut sessions = state.sessions.lock().await;
    let session = sessions
        .get_mut(&id)
        .ok_or(FieldError::SessionNotFound(id))?;

    info!(
        session = %id,
        vertices = boundary.vertex_count(),
        "Farm boundary captured"
    );
    session.set_boundary(boundary);

    Ok(Json(SessionSummary::from(&*session)))
}

/// POST /api/sessions/:id/reset - Discard the boundary and dataset
#[instrument(skip(state))]
pub async fn reset_session_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSummary>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let session = sessions
        .get_mut(&id)
        .ok_or(FieldError::SessionNotFound(id))?;

    session.reset();
    info!(session = %id, "Session reset");

    Ok(Json(SessionSummary::from(&*session)))
}
