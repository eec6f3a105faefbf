//! Area-of-interest geometry: the user-drawn farm boundary.

use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;
use crate::error::{FieldError, FieldResult};

/// A WGS84 coordinate in (longitude, latitude) order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Check the coordinate is finite and within WGS84 bounds.
    pub fn is_valid(&self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }
}

impl From<[f64; 2]> for Coordinate {
    /// GeoJSON position order: `[lon, lat]`.
    fn from(pos: [f64; 2]) -> Self {
        Self { lon: pos[0], lat: pos[1] }
    }
}

/// A user-drawn farm boundary: a closed polygon ring in (lon, lat) order.
///
/// Construction validates the ring, so downstream consumers (the data
/// synthesizer, the overlay renderer) never see a degenerate boundary.
/// Geometric simplicity is NOT checked; a self-intersecting ring is accepted
/// and only its bounding box is ever consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaOfInterest {
    ring: Vec<Coordinate>,
}

impl AreaOfInterest {
    /// Build a boundary from a closed ring of coordinates.
    ///
    /// Requirements:
    /// - every coordinate finite and within WGS84 bounds,
    /// - first and last vertex equal (closed ring),
    /// - at least 3 distinct vertices (closing duplicate excluded).
    pub fn new(ring: Vec<Coordinate>) -> FieldResult<Self> {
        if let Some(bad) = ring.iter().find(|c| !c.is_valid()) {
            return Err(FieldError::InvalidCoordinate {
                lon: bad.lon,
                lat: bad.lat,
            });
        }

        match (ring.first(), ring.last()) {
            (Some(first), Some(last)) if first == last => {}
            _ => return Err(FieldError::BoundaryRingNotClosed),
        }

        let distinct = count_distinct(&ring[..ring.len() - 1]);
        if distinct < 3 {
            return Err(FieldError::BoundaryTooSmall { distinct });
        }

        Ok(Self { ring })
    }

    /// Build a boundary from GeoJSON-style `[lon, lat]` positions.
    pub fn from_positions(positions: &[[f64; 2]]) -> FieldResult<Self> {
        Self::new(positions.iter().map(|&p| Coordinate::from(p)).collect())
    }

    /// The closed exterior ring, including the repeated closing vertex.
    pub fn exterior(&self) -> &[Coordinate] {
        &self.ring
    }

    /// Number of distinct vertices in the ring.
    pub fn vertex_count(&self) -> usize {
        count_distinct(&self.ring[..self.ring.len() - 1])
    }

    /// Min/max extent of the ring.
    pub fn bounding_box(&self) -> BoundingBox {
        // The ring is non-empty by construction.
        BoundingBox::from_coordinates(&self.ring)
            .expect("validated ring is never empty")
    }
}

fn count_distinct(coords: &[Coordinate]) -> usize {
    let mut distinct: Vec<Coordinate> = Vec::with_capacity(coords.len());
    for c in coords {
        if !distinct.contains(c) {
            distinct.push(*c);
        }
    }
    distinct.len()
}
