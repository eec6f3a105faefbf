//! The agronomic anomaly catalog and synthetic anomaly regions.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};

use field_common::{BoundingBox, Coordinate};

/// The fixed catalog of anomaly kinds a mock analysis can flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnomalyKind {
    #[serde(rename = "Double Plant")]
    DoublePlant,
    Drydown,
    Endrow,
    #[serde(rename = "Nutrient Deficiency")]
    NutrientDeficiency,
    #[serde(rename = "Planter Skip")]
    PlanterSkip,
    #[serde(rename = "Water Accumulation")]
    WaterAccumulation,
}

impl AnomalyKind {
    pub const ALL: [AnomalyKind; 6] = [
        AnomalyKind::DoublePlant,
        AnomalyKind::Drydown,
        AnomalyKind::Endrow,
        AnomalyKind::NutrientDeficiency,
        AnomalyKind::PlanterSkip,
        AnomalyKind::WaterAccumulation,
    ];

    /// Display name as shown in alerts and map tooltips.
    pub fn label(self) -> &'static str {
        match self {
            AnomalyKind::DoublePlant => "Double Plant",
            AnomalyKind::Drydown => "Drydown",
            AnomalyKind::Endrow => "Endrow",
            AnomalyKind::NutrientDeficiency => "Nutrient Deficiency",
            AnomalyKind::PlanterSkip => "Planter Skip",
            AnomalyKind::WaterAccumulation => "Water Accumulation",
        }
    }
}

impl std::fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Footprint shape a catalog entry renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeTemplate {
    /// Axis-aligned rectangle (5-point closed ring).
    Rectangle,
    /// Kite-shaped quadrilateral (4-point closed ring).
    Kite,
}

/// Static catalog entry: display color, agronomic description, footprint.
#[derive(Debug, Clone, Copy)]
pub struct AnomalyTemplate {
    pub color: &'static str,
    pub description: &'static str,
    pub shape: ShapeTemplate,
}

static CATALOG: Lazy<HashMap<AnomalyKind, AnomalyTemplate>> = Lazy::new(|| {
    HashMap::from([
        (
            AnomalyKind::DoublePlant,
            AnomalyTemplate {
                color: "#FFD700",
                description: "High density planting, potentially impacting yield and resource competition.",
                shape: ShapeTemplate::Rectangle,
            },
        ),
        (
            AnomalyKind::Drydown,
            AnomalyTemplate {
                color: "#8B4513",
                description: "Area showing signs of severe water stress or maturation, check irrigation.",
                shape: ShapeTemplate::Kite,
            },
        ),
        (
            AnomalyKind::Endrow,
            AnomalyTemplate {
                color: "#00CED1",
                description: "Irregular planting or stress detected at the end of rows. Could be due to turns or machinery issues.",
                shape: ShapeTemplate::Kite,
            },
        ),
        (
            AnomalyKind::NutrientDeficiency,
            AnomalyTemplate {
                color: "#A0522D",
                description: "Area indicating lack of essential nutrients. Consider soil testing.",
                shape: ShapeTemplate::Rectangle,
            },
        ),
        (
            AnomalyKind::PlanterSkip,
            AnomalyTemplate {
                color: "#DC143C",
                description: "Gaps in planting due to planter malfunction. May lead to yield loss.",
                shape: ShapeTemplate::Rectangle,
            },
        ),
        (
            AnomalyKind::WaterAccumulation,
            AnomalyTemplate {
                color: "#4682B4",
                description: "Ponding or waterlogged area. Can cause root damage and disease.",
                shape: ShapeTemplate::Kite,
            },
        ),
    ])
});

/// Look up the static template for a kind.
pub fn template(kind: AnomalyKind) -> &'static AnomalyTemplate {
    &CATALOG[&kind]
}

/// A flagged anomaly region within an analyzed boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyReport {
    pub kind: AnomalyKind,
    pub description: String,
    pub color: String,
    /// Closed ring in (lon, lat) order.
    pub polygon: Vec<Coordinate>,
}

/// Synthesize an anomaly region near the center of `bounds`.
///
/// The footprint spans `span_fraction` of the bounding box on each axis and
/// is displaced from the center by a uniform offset within that same span.
pub fn synthesize_report<R: Rng + ?Sized>(
    bounds: &BoundingBox,
    span_fraction: f64,
    rng: &mut R,
) -> AnomalyReport {
    let kind = AnomalyKind::ALL[rng.gen_range(0..AnomalyKind::ALL.len())];
    let template = template(kind);

    let lon_span = bounds.width() * span_fraction;
    let lat_span = bounds.height() * span_fraction;
    let center = bounds.center();

    // A degenerate axis (collinear boundary) leaves no room to offset on it.
    let lon = center.lon + sample_offset(rng, lon_span);
    let lat = center.lat + sample_offset(rng, lat_span);

    let polygon = match template.shape {
        ShapeTemplate::Rectangle => vec![
            Coordinate::new(lon - lon_span / 2.0, lat - lat_span / 2.0),
            Coordinate::new(lon + lon_span / 2.0, lat - lat_span / 2.0),
            Coordinate::new(lon + lon_span / 2.0, lat + lat_span / 2.0),
            Coordinate::new(lon - lon_span / 2.0, lat + lat_span / 2.0),
            Coordinate::new(lon - lon_span / 2.0, lat - lat_span / 2.0),
        ],
        ShapeTemplate::Kite => vec![
            Coordinate::new(lon, lat + lat_span / 2.0),
            Coordinate::new(lon + lon_span / 2.0, lat - lat_span / 4.0),
            Coordinate::new(lon - lon_span / 2.0, lat - lat_span / 4.0),
            Coordinate::new(lon, lat + lat_span / 2.0),
        ],
    };

    AnomalyReport {
        kind,
        description: template.description.to_string(),
        color: template.color.to_string(),
        polygon,
    }
}

fn sample_offset<R: Rng + ?Sized>(rng: &mut R, span: f64) -> f64 {
    if span > 0.0 {
        rng.gen_range(-span..span)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_catalog_covers_every_kind() {
        for kind in AnomalyKind::ALL {
            let template = template(kind);
            assert!(template.color.starts_with('#'));
            assert!(!template.description.is_empty());
        }
    }

    #[test]
    fn test_rectangle_report_is_closed_five_point_ring() {
        let bounds = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let mut rng = StdRng::seed_from_u64(7);
        // Keep sampling until a rectangle-shaped kind comes up.
        let report = std::iter::repeat_with(|| synthesize_report(&bounds, 0.1, &mut rng))
            .find(|r| template(r.kind).shape == ShapeTemplate::Rectangle)
            .unwrap();
        assert_eq!(report.polygon.len(), 5);
        assert_eq!(report.polygon.first(), report.polygon.last());
    }

    #[test]
    fn test_kite_report_is_closed_four_point_ring() {
        let bounds = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let mut rng = StdRng::seed_from_u64(7);
        let report = std::iter::repeat_with(|| synthesize_report(&bounds, 0.1, &mut rng))
            .find(|r| template(r.kind).shape == ShapeTemplate::Kite)
            .unwrap();
        assert_eq!(report.polygon.len(), 4);
        assert_eq!(report.polygon.first(), report.polygon.last());
    }

    #[test]
    fn test_report_stays_near_the_boundary_center() {
        let bounds = BoundingBox::new(10.0, 20.0, 12.0, 21.0);
        let lon_span = bounds.width() * 0.1;
        let lat_span = bounds.height() * 0.1;
        let reach = bounds.expanded_by(1.5 * lon_span, 1.5 * lat_span);

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let report = synthesize_report(&bounds, 0.1, &mut rng);
            for vertex in &report.polygon {
                assert!(reach.contains(vertex), "vertex {:?} escaped {:?}", vertex, reach);
            }
        }
    }

    #[test]
    fn test_degenerate_axis_does_not_panic() {
        // Collinear boundary: zero height.
        let bounds = BoundingBox::new(10.0, 20.0, 12.0, 20.0);
        let mut rng = StdRng::seed_from_u64(3);
        let report = synthesize_report(&bounds, 0.1, &mut rng);
        // Zero span on the latitude axis collapses the footprint onto it.
        assert!(report.polygon.iter().all(|c| c.lat == 20.0));
    }

    #[test]
    fn test_kind_serializes_with_display_name() {
        let json = serde_json::to_string(&AnomalyKind::DoublePlant).unwrap();
        assert_eq!(json, "\"Double Plant\"");
    }
}
