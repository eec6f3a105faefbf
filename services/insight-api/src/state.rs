//! Application state and shared resources.

use anyhow::Result;
use std::collections::HashMap;
use std::env;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

use renderer::StressPalette;
use session::Session;
use synthesis::{FieldSynthesizer, SynthesisConfig};

/// Service configuration, read from the environment with defaults.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// How long the mock analysis pretends to fetch satellite data.
    pub analysis_delay: Duration,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let delay_ms = env::var("ANALYSIS_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(3000);
        Self {
            analysis_delay: Duration::from_millis(delay_ms),
        }
    }
}

/// Shared application state.
pub struct AppState {
    pub sessions: Mutex<HashMap<Uuid, Session>>,
    pub synthesizer: FieldSynthesizer,
    pub palette: StressPalette,
    pub config: ServiceConfig,
}

/// State with no analysis delay, for handler unit tests.
#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    AppState {
        sessions: Mutex::new(HashMap::new()),
        synthesizer: FieldSynthesizer::default(),
        palette: StressPalette::default(),
        config: ServiceConfig {
            analysis_delay: Duration::ZERO,
        },
    }
}

impl AppState {
    pub fn new() -> Result<Self> {
        let mut synthesis_config = SynthesisConfig::default();
        if let Some(probability) = env::var("ANOMALY_PROBABILITY")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
        {
            synthesis_config.anomaly_probability = probability;
        }

        let synthesizer = FieldSynthesizer::new(synthesis_config)?;

        Ok(Self {
            sessions: Mutex::new(HashMap::new()),
            synthesizer,
            palette: StressPalette::default(),
            config: ServiceConfig::from_env(),
        })
    }
}
