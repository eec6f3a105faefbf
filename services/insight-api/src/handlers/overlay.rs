//! Stress-overlay endpoints for the map collaborator.

use axum::{
    extract::{Extension, Path},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use field_common::FieldError;
use renderer::{overlay_data_uri, render_stress_overlay};
use synthesis::AnomalyReport;

use crate::handlers::common::ApiError;
use crate::state::AppState;

/// Everything an image-overlay map layer needs to draw one analysis.
#[derive(Debug, Serialize)]
pub struct OverlayResponse {
    /// `data:image/png;base64,` URI of the stress raster.
    pub image: String,
    /// `[[min_lat, min_lon], [max_lat, max_lon]]` overlay placement.
    pub bounds: [[f64; 2]; 2],
    /// The drawn boundary ring as `[lon, lat]` positions.
    pub boundary: Vec<[f64; 2]>,
    pub anomaly: Option<AnomalyReport>,
}

/// GET /api/sessions/:id/overlay - Overlay package as JSON
#[instrument(skip(state))]
pub async fn overlay_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<OverlayResponse>, ApiError> {
    let sessions = state.sessions.lock().await;
    let session = sessions.get(&id).ok_or(FieldError::SessionNotFound(id))?;
    let dataset = session.dataset().ok_or(FieldError::DatasetMissing)?;
    let boundary = session.boundary().ok_or(FieldError::BoundaryMissing)?;

    let image = overlay_data_uri(&dataset.stress_grid, &state.palette)?;

    Ok(Json(OverlayResponse {
        image,
        bounds: dataset.bounds.corner_rows(),
        boundary: boundary.exterior().iter().map(|c| [c.lon, c.lat]).collect(),
        anomaly: dataset.anomaly.clone(),
    }))
}

/// GET /api/sessions/:id/overlay.png - Overlay as raw PNG
#[instrument(skip(state))]
pub async fn overlay_png_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let sessions = state.sessions.lock().await;
    let session = sessions.get(&id).ok_or(FieldError::SessionNotFound(id))?;
    let dataset = session.dataset().ok_or(FieldError::DatasetMissing)?;

    let png = render_stress_overlay(&dataset.stress_grid, &state.palette)?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}
