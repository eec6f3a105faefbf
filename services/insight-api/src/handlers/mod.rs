//! HTTP request handlers for the field-insight API.
//!
//! This module is organized into submodules:
//! - `sessions`: session lifecycle (create, inspect, boundary, reset)
//! - `analysis`: the mock analysis trigger and dataset/insight retrieval
//! - `overlay`: stress-overlay image endpoints for the map collaborator
//! - `health`: liveness and readiness checks
//! - `common`: shared DTOs and error-to-response mapping

pub mod analysis;
pub mod common;
pub mod health;
pub mod overlay;
pub mod sessions;

pub use common::{ApiError, SessionSummary};

pub use sessions::{
    create_session_handler,
    get_session_handler,
    reset_session_handler,
    set_boundary_handler,
    BoundaryRequest,
};

pub use analysis::{
    analyze_handler,
    get_dataset_handler,
    get_insights_handler,
    AnalyzeRequest,
    AnalyzeResponse,
};

pub use overlay::{overlay_handler, overlay_png_handler, OverlayResponse};

pub use health::{health_handler, ready_handler};
