//! Synthesis tunables.
//!
//! `Default` reproduces the deployed dashboard constants; everything is
//! validated up front so generation itself can never fail.

use rand::Rng;
use serde::{Deserialize, Serialize};

use field_common::{DateOrder, FieldError, FieldResult};

/// A half-open uniform sampling range `[low, high)` over `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub low: f64,
    pub high: f64,
}

impl SampleRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Draw one sample uniformly from `[low, high)`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.low..self.high)
    }

    fn validate(&self, name: &str) -> FieldResult<()> {
        if !self.low.is_finite() || !self.high.is_finite() || self.low >= self.high {
            return Err(FieldError::InvalidConfig(format!(
                "{} range [{}, {}) is empty or not finite",
                name, self.low, self.high
            )));
        }
        Ok(())
    }
}

/// A half-open uniform integer percentage range `[low, high)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentRange {
    pub low: u8,
    pub high: u8,
}

impl PercentRange {
    pub fn new(low: u8, high: u8) -> Self {
        Self { low, high }
    }

    /// Draw one whole-percent sample uniformly from `[low, high)`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        rng.gen_range(self.low..self.high)
    }

    /// Largest value the range can produce.
    fn max_sample(&self) -> u8 {
        self.high - 1
    }

    fn validate(&self, name: &str) -> FieldResult<()> {
        if self.low >= self.high || self.high > 101 {
            return Err(FieldError::InvalidConfig(format!(
                "{} percent range [{}, {}) is empty or exceeds 100",
                name, self.low, self.high
            )));
        }
        Ok(())
    }
}

/// Configuration for one [`FieldSynthesizer`](crate::FieldSynthesizer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Stress raster width in cells.
    pub grid_width: usize,
    /// Stress raster height in cells.
    pub grid_height: usize,
    /// Range the severe share is drawn from.
    pub severe_pct: PercentRange,
    /// Range the stressed share is drawn from.
    pub stressed_pct: PercentRange,
    /// Number of historical vegetation-index samples.
    pub ndvi_history_len: usize,
    pub ndvi_history_range: SampleRange,
    /// Number of forecast vegetation-index samples.
    pub ndvi_forecast_len: usize,
    pub ndvi_forecast_range: SampleRange,
    /// Number of daily environmental samples (and calendar dates).
    pub environment_days: usize,
    pub soil_moisture_range: SampleRange,
    pub temperature_range: SampleRange,
    /// Ordering of the environmental date axis.
    pub date_order: DateOrder,
    /// Probability that an analysis flags a synthetic anomaly. Zero disables
    /// anomaly synthesis entirely.
    pub anomaly_probability: f64,
    /// Anomaly extent as a fraction of the boundary bounding-box span.
    pub anomaly_span_fraction: f64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            grid_width: 100,
            grid_height: 100,
            severe_pct: PercentRange::new(5, 25),
            stressed_pct: PercentRange::new(10, 30),
            ndvi_history_len: 12,
            ndvi_history_range: SampleRange::new(0.55, 0.75),
            ndvi_forecast_len: 14,
            ndvi_forecast_range: SampleRange::new(0.45, 0.70),
            environment_days: 30,
            soil_moisture_range: SampleRange::new(20.0, 45.0),
            temperature_range: SampleRange::new(25.0, 40.0),
            date_order: DateOrder::OldestFirst,
            anomaly_probability: 0.7,
            anomaly_span_fraction: 0.1,
        }
    }
}

impl SynthesisConfig {
    /// Check every tunable before any sampling happens.
    ///
    /// The percentage ranges must leave a non-negative healthy remainder for
    /// any pair of samples, so the health shares always partition 100.
    pub fn validate(&self) -> FieldResult<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(FieldError::InvalidConfig(format!(
                "grid dimensions must be non-zero, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }

        self.severe_pct.validate("severe")?;
        self.stressed_pct.validate("stressed")?;
        let worst_case = self.severe_pct.max_sample() as u32 + self.stressed_pct.max_sample() as u32;
        if worst_case > 100 {
            return Err(FieldError::InvalidConfig(format!(
                "severe and stressed ranges can sum to {}%, leaving a negative healthy share",
                worst_case
            )));
        }

        if self.ndvi_history_len == 0 || self.ndvi_forecast_len == 0 || self.environment_days == 0 {
            return Err(FieldError::InvalidConfig(
                "series lengths must be non-zero".to_string(),
            ));
        }
        self.ndvi_history_range.validate("ndvi history")?;
        self.ndvi_forecast_range.validate("ndvi forecast")?;
        self.soil_moisture_range.validate("soil moisture")?;
        self.temperature_range.validate("temperature")?;

        if !(0.0..=1.0).contains(&self.anomaly_probability) {
            return Err(FieldError::InvalidConfig(format!(
                "anomaly probability {} is not in [0, 1]",
                self.anomaly_probability
            )));
        }
        if !self.anomaly_span_fraction.is_finite()
            || !(0.0..=1.0).contains(&self.anomaly_span_fraction)
        {
            return Err(FieldError::InvalidConfig(format!(
                "anomaly span fraction {} is not in [0, 1]",
                self.anomaly_span_fraction
            )));
        }

        Ok(())
    }
}
