//! Mock-analysis trigger and result retrieval.

use axum::{
    extract::{Extension, Path},
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use field_common::FieldError;
use synthesis::{FieldHealthDataset, Insights};

use crate::handlers::common::{ApiError, SessionSummary};
use crate::state::AppState;

/// Optional analysis parameters.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    /// Fixed RNG seed for reproducible output; omitted means fresh entropy.
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub session: SessionSummary,
    pub dataset: FieldHealthDataset,
    pub insights: Insights,
}

/// POST /api/sessions/:id/analyze - Run the mock analysis
///
/// Refuses immediately when no boundary is drawn; otherwise sits through the
/// configured delay (simulating the satellite fetch) before generating.
#[instrument(skip(state, request))]
pub async fn analyze_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<Uuid>,
    request: Option<Json<AnalyzeRequest>>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let seed = request.and_then(|Json(r)| r.seed);

    // Fail fast before the simulated fetch.
    {
        let sessions = state.sessions.lock().await;
        let session = sessions.get(&id).ok_or(FieldError::SessionNotFound(id))?;
        if session.boundary().is_none() {
            return Err(FieldError::BoundaryMissing.into());
        }
    }

    info!(session = %id, seed = ?seed, "Running field analysis");
    // The delay runs outside the session lock so other sessions proceed.
    tokio::time::sleep(state.config.analysis_delay).await;

    let mut sessions = state.sessions.lock().await;
    let session = sessions
        .get_mut(&id)
        .ok_or(FieldError::SessionNotFound(id))?;

    let dataset = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            session.start_analysis(&state.synthesizer, &mut rng)?
        }
        None => session.start_analysis(&state.synthesizer, &mut rand::thread_rng())?,
    }
    .clone();

    let insights = Insights::evaluate(&dataset);
    info!(
        session = %id,
        severe_pct = dataset.health_distribution.severe,
        alert = ?insights.alert,
        "Analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        session: SessionSummary::from(&*session),
        dataset,
        insights,
    }))
}

/// GET /api/sessions/:id/dataset - Full dataset of the last analysis
#[instrument(skip(state))]
pub async fn get_dataset_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<FieldHealthDataset>, ApiError> {
    let sessions = state.sessions.lock().await;
    let session = sessions.get(&id).ok_or(FieldError::SessionNotFound(id))?;
    let dataset = session.dataset().ok_or(FieldError::DatasetMissing)?;
    Ok(Json(dataset.clone()))
}

/// GET /api/sessions/:id/insights - Alerts and headline metrics
#[instrument(skip(state))]
pub async fn get_insights_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Insights>, ApiError> {
    let sessions = state.sessions.lock().await;
    let session = sessions.get(&id).ok_or(FieldError::SessionNotFound(id))?;
    let dataset = session.dataset().ok_or(FieldError::DatasetMissing)?;
    Ok(Json(Insights::evaluate(dataset)))
}
