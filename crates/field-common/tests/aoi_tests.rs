//! Comprehensive tests for boundary validation and bounding boxes.

use field_common::{AreaOfInterest, BoundingBox, Coordinate, FieldError};

fn ring(points: &[(f64, f64)]) -> Vec<Coordinate> {
    points.iter().map(|&(lon, lat)| Coordinate::new(lon, lat)).collect()
}

// ============================================================================
// Construction tests
// ============================================================================

#[test]
fn test_triangle_is_smallest_valid_boundary() {
    let aoi = AreaOfInterest::new(ring(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (0.5, 1.0),
        (0.0, 0.0),
    ]))
    .unwrap();
    assert_eq!(aoi.vertex_count(), 3);
}

#[test]
fn test_unit_square_scenario() {
    // The canonical scenario: unit square ring.
    let aoi = AreaOfInterest::from_positions(&[
        [0.0, 0.0],
        [1.0, 0.0],
        [1.0, 1.0],
        [0.0, 1.0],
        [0.0, 0.0],
    ])
    .unwrap();

    let bbox = aoi.bounding_box();
    assert_eq!(bbox, BoundingBox::new(0.0, 0.0, 1.0, 1.0));
    assert_eq!(bbox.corner_rows(), [[0.0, 0.0], [1.0, 1.0]]);
}

#[test]
fn test_duplicate_interior_vertices_do_not_inflate_count() {
    let aoi = AreaOfInterest::new(ring(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (1.0, 0.0),
        (0.5, 1.0),
        (0.0, 0.0),
    ]))
    .unwrap();
    assert_eq!(aoi.vertex_count(), 3);
}

#[test]
fn test_collinear_but_distinct_vertices_accepted() {
    // Geometric simplicity is not checked; only vertex distinctness is.
    let result = AreaOfInterest::new(ring(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (0.0, 0.0),
    ]));
    assert!(result.is_ok());
}

// ============================================================================
// Rejection tests
// ============================================================================

#[test]
fn test_open_ring_rejected() {
    let result = AreaOfInterest::new(ring(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (0.5, 1.0),
    ]));
    assert!(matches!(result, Err(FieldError::BoundaryRingNotClosed)));
}

#[test]
fn test_single_point_ring_rejected() {
    // Closed but collapses to one distinct vertex.
    let result = AreaOfInterest::new(ring(&[(5.0, 5.0), (5.0, 5.0)]));
    assert!(matches!(
        result,
        Err(FieldError::BoundaryTooSmall { distinct: 1 })
    ));
}

#[test]
fn test_latitude_out_of_range_rejected() {
    let result = AreaOfInterest::new(ring(&[
        (0.0, 0.0),
        (1.0, 91.0),
        (1.0, 1.0),
        (0.0, 0.0),
    ]));
    assert!(matches!(result, Err(FieldError::InvalidCoordinate { .. })));
}

#[test]
fn test_infinite_longitude_rejected() {
    let result = AreaOfInterest::new(ring(&[
        (0.0, 0.0),
        (f64::INFINITY, 0.0),
        (1.0, 1.0),
        (0.0, 0.0),
    ]));
    assert!(matches!(result, Err(FieldError::InvalidCoordinate { .. })));
}

// ============================================================================
// Bounding box properties
// ============================================================================

#[test]
fn test_bbox_is_ordered_and_contains_all_vertices() {
    let aoi = AreaOfInterest::new(ring(&[
        (73.12, 22.31),
        (73.18, 22.29),
        (73.21, 22.36),
        (73.14, 22.39),
        (73.12, 22.31),
    ]))
    .unwrap();

    let bbox = aoi.bounding_box();
    assert!(bbox.min_lon <= bbox.max_lon);
    assert!(bbox.min_lat <= bbox.max_lat);
    assert!(aoi.exterior().iter().all(|c| bbox.contains(c)));
}

#[test]
fn test_bbox_of_negative_hemisphere() {
    let aoi = AreaOfInterest::new(ring(&[
        (-60.5, -33.4),
        (-60.1, -33.4),
        (-60.1, -33.0),
        (-60.5, -33.4),
    ]))
    .unwrap();

    let bbox = aoi.bounding_box();
    assert_eq!(bbox.min_lon, -60.5);
    assert_eq!(bbox.max_lat, -33.0);
}
