//! The mock field-data generator.

use chrono::{NaiveDate, Utc};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use field_common::{observation_dates, AreaOfInterest, FieldResult, StressGrid};

use crate::anomaly;
use crate::config::SynthesisConfig;
use crate::dataset::{FieldHealthDataset, HealthDistribution};

/// Generates a complete [`FieldHealthDataset`] for a drawn boundary.
///
/// Pure apart from the injected RNG: the same seed and boundary produce a
/// bit-identical dataset. Construction validates the configuration, so
/// generation itself never fails.
#[derive(Debug, Clone)]
pub struct FieldSynthesizer {
    config: SynthesisConfig,
}

impl Default for FieldSynthesizer {
    fn default() -> Self {
        Self {
            config: SynthesisConfig::default(),
        }
    }
}

impl FieldSynthesizer {
    pub fn new(config: SynthesisConfig) -> FieldResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Run one mock analysis with the environmental series ending today.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        aoi: &AreaOfInterest,
        rng: &mut R,
    ) -> FieldHealthDataset {
        self.generate_for_date(aoi, Utc::now().date_naive(), rng)
    }

    /// Run one mock analysis with an explicit end date for the environmental
    /// series. Tests pin the date here; the service passes the current day.
    pub fn generate_for_date<R: Rng + ?Sized>(
        &self,
        aoi: &AreaOfInterest,
        today: NaiveDate,
        rng: &mut R,
    ) -> FieldHealthDataset {
        let config = &self.config;

        let severe = config.severe_pct.sample(rng);
        let stressed = config.stressed_pct.sample(rng);
        // The validated ranges leave the remainder non-negative.
        let healthy = 100 - severe - stressed;
        let health_distribution = HealthDistribution::new(healthy, stressed, severe)
            .expect("validated percent ranges always partition 100");

        let stress_grid = self.sample_grid(&health_distribution, rng);

        let mut ndvi_history: Vec<f64> = (0..config.ndvi_history_len)
            .map(|_| config.ndvi_history_range.sample(rng))
            .collect();
        ndvi_history.sort_by(f64::total_cmp);

        let mut ndvi_forecast: Vec<f64> = (0..config.ndvi_forecast_len)
            .map(|_| config.ndvi_forecast_range.sample(rng))
            .collect();
        ndvi_forecast.sort_by(f64::total_cmp);
        if rng.gen_bool(0.5) {
            ndvi_forecast.reverse();
        }

        let soil_moisture: Vec<f64> = (0..config.environment_days)
            .map(|_| config.soil_moisture_range.sample(rng))
            .collect();
        let temperature: Vec<f64> = (0..config.environment_days)
            .map(|_| config.temperature_range.sample(rng))
            .collect();

        let dates = observation_dates(today, config.environment_days, config.date_order);
        let bounds = aoi.bounding_box();

        let anomaly = if config.anomaly_probability > 0.0
            && rng.gen_bool(config.anomaly_probability)
        {
            Some(anomaly::synthesize_report(
                &bounds,
                config.anomaly_span_fraction,
                rng,
            ))
        } else {
            None
        };

        FieldHealthDataset {
            stress_grid,
            health_distribution,
            ndvi_history,
            ndvi_forecast,
            soil_moisture,
            temperature,
            dates,
            bounds,
            anomaly,
        }
    }

    /// Sample every cell independently from the health distribution.
    /// Cells are spatially uncorrelated.
    fn sample_grid<R: Rng + ?Sized>(
        &self,
        distribution: &HealthDistribution,
        rng: &mut R,
    ) -> StressGrid {
        let weights = distribution.weights();
        let sampler =
            WeightedIndex::new(weights).expect("distribution weights always sum to 100");

        let width = self.config.grid_width;
        let height = self.config.grid_height;
        let cells: Vec<u8> = (0..width * height)
            .map(|_| sampler.sample(rng) as u8)
            .collect();

        StressGrid::new(width, height, cells)
            .expect("sampled cells are valid classes of the configured shape")
    }
}
