//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

use crate::aoi::Coordinate;

/// A geographic bounding box in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Compute the min/max extent of a set of coordinates.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_coordinates(coords: &[Coordinate]) -> Option<Self> {
        let first = coords.first()?;
        let mut bbox = Self::new(first.lon, first.lat, first.lon, first.lat);
        for c in &coords[1..] {
            bbox.min_lon = bbox.min_lon.min(c.lon);
            bbox.min_lat = bbox.min_lat.min(c.lat);
            bbox.max_lon = bbox.max_lon.max(c.lon);
            bbox.max_lat = bbox.max_lat.max(c.lat);
        }
        Some(bbox)
    }

    /// Width of the bounding box in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height of the bounding box in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Center point of the bounding box.
    pub fn center(&self) -> Coordinate {
        Coordinate {
            lon: (self.min_lon + self.max_lon) / 2.0,
            lat: (self.min_lat + self.max_lat) / 2.0,
        }
    }

    /// Check if a coordinate is contained within this bbox.
    pub fn contains(&self, c: &Coordinate) -> bool {
        c.lon >= self.min_lon
            && c.lon <= self.max_lon
            && c.lat >= self.min_lat
            && c.lat <= self.max_lat
    }

    /// A copy of this bbox grown by the given margins on every side.
    pub fn expanded_by(&self, lon_margin: f64, lat_margin: f64) -> Self {
        Self {
            min_lon: self.min_lon - lon_margin,
            min_lat: self.min_lat - lat_margin,
            max_lon: self.max_lon + lon_margin,
            max_lat: self.max_lat + lat_margin,
        }
    }

    /// Corner rows in `[[min_lat, min_lon], [max_lat, max_lon]]` order.
    ///
    /// This is the form image-overlay map collaborators take their bounds in
    /// (latitude first).
    pub fn corner_rows(&self) -> [[f64; 2]; 2] {
        [
            [self.min_lat, self.min_lon],
            [self.max_lat, self.max_lon],
        ]
    }
}
