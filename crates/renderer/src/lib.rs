//! Overlay rendering for stress rasters.
//!
//! Turns a [`field_common::StressGrid`] into an indexed PNG (with alpha, so
//! the map underneath shows through) and packages it as a base64 data URI
//! for image-overlay map collaborators.

pub mod overlay;
pub mod palette;
pub mod png;

pub use overlay::{overlay_data_uri, render_stress_overlay};
pub use palette::{hex_to_rgb, Rgba, StressPalette};
