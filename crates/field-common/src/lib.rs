//! Common types and utilities shared across all field-insight crates.

pub mod aoi;
pub mod bbox;
pub mod error;
pub mod grid;
pub mod time;

pub use aoi::{AreaOfInterest, Coordinate};
pub use bbox::BoundingBox;
pub use error::{FieldError, FieldResult};
pub use grid::{StressClass, StressGrid};
pub use time::{observation_dates, DateOrder};
