//! Full session flow through the API handlers.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Extension, Path};
use axum::Json;
use tokio::sync::Mutex;

use insight_api::handlers::{
    analyze_handler, create_session_handler, get_insights_handler, get_session_handler,
    overlay_handler, reset_session_handler, set_boundary_handler, AnalyzeRequest, BoundaryRequest,
};
use insight_api::state::{AppState, ServiceConfig};
use renderer::StressPalette;
use session::ViewState;
use synthesis::FieldSynthesizer;

fn state() -> Arc<AppState> {
    Arc::new(AppState {
        sessions: Mutex::new(HashMap::new()),
        synthesizer: FieldSynthesizer::default(),
        palette: StressPalette::default(),
        config: ServiceConfig {
            analysis_delay: Duration::ZERO,
        },
    })
}

fn farm_ring() -> Vec<[f64; 2]> {
    vec![
        [73.10, 22.30],
        [73.18, 22.29],
        [73.21, 22.36],
        [73.14, 22.39],
        [73.10, 22.30],
    ]
}

#[tokio::test]
async fn test_draw_analyze_inspect_reset() {
    let state = state();

    // Draw
    let (_, Json(created)) = create_session_handler(Extension(state.clone())).await;
    let Json(after_boundary) = set_boundary_handler(
        Extension(state.clone()),
        Path(created.id),
        Json(BoundaryRequest { ring: farm_ring() }),
    )
    .await
    .unwrap();
    assert_eq!(after_boundary.view, ViewState::AwaitingBoundary);
    assert!(after_boundary.has_boundary);

    // Analyze (seeded, so the assertions below are stable)
    let Json(analysis) = analyze_handler(
        Extension(state.clone()),
        Path(created.id),
        Some(Json(AnalyzeRequest { seed: Some(7) })),
    )
    .await
    .unwrap();
    assert_eq!(analysis.session.view, ViewState::ShowingDashboard);

    let dist = analysis.dataset.health_distribution;
    assert_eq!(
        dist.healthy as u32 + dist.stressed as u32 + dist.severe as u32,
        100
    );
    assert_eq!(analysis.dataset.ndvi_history.len(), 12);
    assert_eq!(analysis.dataset.ndvi_forecast.len(), 14);

    // Inspect
    let Json(insights) = get_insights_handler(Extension(state.clone()), Path(created.id))
        .await
        .unwrap();
    assert_eq!(insights.alert, analysis.insights.alert);

    let Json(overlay) = overlay_handler(Extension(state.clone()), Path(created.id))
        .await
        .unwrap();
    assert!(overlay.image.starts_with("data:image/png;base64,"));
    assert_eq!(overlay.boundary.len(), farm_ring().len());

    // Reset
    let Json(after_reset) = reset_session_handler(Extension(state.clone()), Path(created.id))
        .await
        .unwrap();
    assert_eq!(after_reset.view, ViewState::AwaitingBoundary);
    assert!(!after_reset.has_boundary);
    assert!(!after_reset.has_dataset);

    let Json(fetched) = get_session_handler(Extension(state), Path(created.id))
        .await
        .unwrap();
    assert!(!fetched.has_dataset);
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let state = state();

    let (_, Json(a)) = create_session_handler(Extension(state.clone())).await;
    let (_, Json(b)) = create_session_handler(Extension(state.clone())).await;
    assert_ne!(a.id, b.id);

    set_boundary_handler(
        Extension(state.clone()),
        Path(a.id),
        Json(BoundaryRequest { ring: farm_ring() }),
    )
    .await
    .unwrap();
    analyze_handler(Extension(state.clone()), Path(a.id), None)
        .await
        .unwrap();

    // Session B never drew a boundary and is untouched by A's analysis.
    let Json(b_summary) = get_session_handler(Extension(state), Path(b.id))
        .await
        .unwrap();
    assert_eq!(b_summary.view, ViewState::AwaitingBoundary);
    assert!(!b_summary.has_dataset);
}
