//! Alerts and headline metrics derived from a generated dataset.

use serde::{Deserialize, Serialize};

use crate::anomaly::AnomalyKind;
use crate::dataset::FieldHealthDataset;

/// Severe share above which the alert escalates to action-required.
const SEVERE_ALERT_THRESHOLD: u8 = 20;

/// Tonnes per hectare per unit of mean historical NDVI.
const YIELD_FACTOR: f64 = 6.5;

/// Regional average yield the estimate is compared against.
const YIELD_BASELINE: f64 = 4.5;

/// Overall alert severity for one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    ActionRequired,
    EarlyWarning,
    AllClear,
}

/// Callout for a flagged anomaly region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyNotice {
    pub kind: AnomalyKind,
    pub description: String,
    pub recommended_action: String,
}

/// Headline yield figure shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldEstimate {
    pub tonnes_per_hectare: f64,
    pub delta_vs_average: f64,
}

/// Everything the alert panel renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub alert: AlertLevel,
    pub message: String,
    pub anomaly_notice: Option<AnomalyNotice>,
    pub estimated_yield: YieldEstimate,
}

impl Insights {
    /// Evaluate the alert rules against a generated dataset.
    ///
    /// A severe share above 20% takes precedence; otherwise a forecast whose
    /// last value sits below its first counts as declining.
    pub fn evaluate(dataset: &FieldHealthDataset) -> Self {
        let severe = dataset.health_distribution.severe;

        let declining = match (dataset.ndvi_forecast.first(), dataset.ndvi_forecast.last()) {
            (Some(first), Some(last)) => last < first,
            _ => false,
        };

        let (alert, message) = if severe > SEVERE_ALERT_THRESHOLD {
            (
                AlertLevel::ActionRequired,
                format!(
                    "Action Required: {}% of your farm shows significant stress. Investigate the highlighted red zones immediately.",
                    severe
                ),
            )
        } else if declining {
            (
                AlertLevel::EarlyWarning,
                "Early Warning: Crop health is predicted to decline. Check irrigation and nutrient levels.".to_string(),
            )
        } else {
            (
                AlertLevel::AllClear,
                "All Clear: Your farm is healthy and the forecast is stable.".to_string(),
            )
        };

        let anomaly_notice = dataset.anomaly.as_ref().map(|report| AnomalyNotice {
            kind: report.kind,
            description: report.description.clone(),
            recommended_action:
                "Investigate the highlighted area on the map immediately.".to_string(),
        });

        Insights {
            alert,
            message,
            anomaly_notice,
            estimated_yield: estimate_yield(&dataset.ndvi_history),
        }
    }
}

fn estimate_yield(ndvi_history: &[f64]) -> YieldEstimate {
    let mean = if ndvi_history.is_empty() {
        0.0
    } else {
        ndvi_history.iter().sum::<f64>() / ndvi_history.len() as f64
    };
    let tonnes_per_hectare = mean * YIELD_FACTOR;
    YieldEstimate {
        tonnes_per_hectare,
        delta_vs_average: tonnes_per_hectare - YIELD_BASELINE,
    }
}
