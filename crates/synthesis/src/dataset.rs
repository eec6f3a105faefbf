//! The output record of one mock analysis.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use field_common::{BoundingBox, FieldError, FieldResult, StressClass, StressGrid};

use crate::anomaly::AnomalyReport;

/// Whole-percent health shares. Always a valid partition of 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDistribution {
    pub healthy: u8,
    pub stressed: u8,
    pub severe: u8,
}

impl HealthDistribution {
    /// Build a distribution, rejecting shares that do not partition 100.
    pub fn new(healthy: u8, stressed: u8, severe: u8) -> FieldResult<Self> {
        let sum = healthy as u32 + stressed as u32 + severe as u32;
        if sum != 100 {
            return Err(FieldError::InvalidConfig(format!(
                "health shares {}/{}/{} sum to {}, expected 100",
                healthy, stressed, severe, sum
            )));
        }
        Ok(Self {
            healthy,
            stressed,
            severe,
        })
    }

    /// Share for one stress class, in whole percent.
    pub fn share(&self, class: StressClass) -> u8 {
        match class {
            StressClass::Healthy => self.healthy,
            StressClass::Stressed => self.stressed,
            StressClass::Severe => self.severe,
        }
    }

    /// Per-class sampling weights in `[healthy, stressed, severe]` order.
    pub fn weights(&self) -> [u32; 3] {
        [
            self.healthy as u32,
            self.stressed as u32,
            self.severe as u32,
        ]
    }
}

/// Everything one mock analysis produces for a drawn boundary.
///
/// Created fresh per analysis and replaced wholesale by the next one; the
/// session machine drops it on reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldHealthDataset {
    /// Per-cell stress classification raster mapped onto `bounds`.
    pub stress_grid: StressGrid,
    pub health_distribution: HealthDistribution,
    /// Historical vegetation index, sorted ascending.
    pub ndvi_history: Vec<f64>,
    /// Forecast vegetation index, monotone (ascending or descending).
    pub ndvi_forecast: Vec<f64>,
    pub soil_moisture: Vec<f64>,
    pub temperature: Vec<f64>,
    /// Calendar dates the environmental series align to.
    pub dates: Vec<NaiveDate>,
    /// Bounding box of the analyzed boundary.
    pub bounds: BoundingBox,
    pub anomaly: Option<AnomalyReport>,
}
