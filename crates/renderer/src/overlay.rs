//! Stress-grid overlay images.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;

use field_common::{FieldResult, StressGrid};

use crate::palette::StressPalette;
use crate::png;

/// Render a stress grid as an indexed PNG overlay.
///
/// Class codes double as palette indices, so the raster encodes without any
/// per-pixel color mapping.
pub fn render_stress_overlay(grid: &StressGrid, palette: &StressPalette) -> FieldResult<Vec<u8>> {
    let bytes = png::create_png_indexed(
        grid.width(),
        grid.height(),
        &palette.entries(),
        grid.cells(),
    )?;
    debug!(
        width = grid.width(),
        height = grid.height(),
        bytes = bytes.len(),
        "Encoded stress overlay"
    );
    Ok(bytes)
}

/// Render a stress grid and package it as a `data:image/png;base64,` URI,
/// the form image-overlay map layers embed directly.
pub fn overlay_data_uri(grid: &StressGrid, palette: &StressPalette) -> FieldResult<String> {
    let bytes = render_stress_overlay(grid, palette)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(bytes)))
}
