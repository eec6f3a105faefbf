//! Field-insight API service.
//!
//! HTTP server backing the field-health demo dashboard: session lifecycle,
//! boundary submission, the mock analysis, and overlay rendering.

mod handlers;
mod state;

use anyhow::Result;
use axum::{
    extract::Extension,
    routing::{get, post, put},
    Router,
};
use clap::Parser;
use std::{env, net::SocketAddr, sync::Arc};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "insight-api")]
#[command(about = "Field-health analysis API server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Number of tokio worker threads (default: number of CPU cores)
    #[arg(long)]
    worker_threads: Option<usize>,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build tokio runtime with configurable worker threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    } else if let Ok(threads_str) = env::var("TOKIO_WORKER_THREADS") {
        if let Ok(threads) = threads_str.parse::<usize>() {
            runtime_builder.worker_threads(threads);
        }
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(args))?;
    Ok(())
}

async fn async_main(args: Args) -> Result<()> {
    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting field-insight API server");

    // Initialize application state
    let state = Arc::new(AppState::new()?);
    info!(
        analysis_delay_ms = state.config.analysis_delay.as_millis() as u64,
        "Analysis delay configured"
    );

    // Build router
    let app = Router::new()
        // Session lifecycle
        .route("/api/sessions", post(handlers::create_session_handler))
        .route("/api/sessions/:id", get(handlers::get_session_handler))
        .route(
            "/api/sessions/:id/boundary",
            put(handlers::set_boundary_handler),
        )
        .route("/api/sessions/:id/reset", post(handlers::reset_session_handler))
        // Analysis
        .route("/api/sessions/:id/analyze", post(handlers::analyze_handler))
        .route("/api/sessions/:id/dataset", get(handlers::get_dataset_handler))
        .route(
            "/api/sessions/:id/insights",
            get(handlers::get_insights_handler),
        )
        // Map overlay
        .route("/api/sessions/:id/overlay", get(handlers::overlay_handler))
        .route(
            "/api/sessions/:id/overlay.png",
            get(handlers::overlay_png_handler),
        )
        // Health check
        .route("/health", get(handlers::health_handler))
        .route("/ready", get(handlers::ready_handler))
        // Layer extensions
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive());

    // Parse listen address
    let addr: SocketAddr = args.listen.parse()?;
    info!(address = %addr, "Listening");

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
