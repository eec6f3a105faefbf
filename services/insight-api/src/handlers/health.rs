//! Liveness and readiness checks.

use axum::{extract::Extension, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::state::AppState;

/// GET /health - Basic health check
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /ready - Readiness check (verifies the session store is reachable)
pub async fn ready_handler(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    let _sessions = state.sessions.lock().await;
    (StatusCode::OK, "Ready")
}
