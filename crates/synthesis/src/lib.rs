//! Mock field-health data generation.
//!
//! Everything a dashboard shows for a drawn farm boundary comes from
//! [`FieldSynthesizer::generate`]: a stress-classification raster, the
//! health-share partition, vegetation-index history and forecast series,
//! environmental time series, and (with some probability) a synthetic
//! anomaly region. All of it is bounded random sampling; entropy is consumed
//! through an injected [`rand::Rng`] so callers choose between fresh and
//! reproducible output.

pub mod anomaly;
pub mod config;
pub mod dataset;
pub mod generator;
pub mod insight;

pub use anomaly::{AnomalyKind, AnomalyReport, ShapeTemplate};
pub use config::{PercentRange, SampleRange, SynthesisConfig};
pub use dataset::{FieldHealthDataset, HealthDistribution};
pub use generator::FieldSynthesizer;
pub use insight::{AlertLevel, AnomalyNotice, Insights, YieldEstimate};
