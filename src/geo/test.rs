use geo::{Geometry, LineString, Polygon, point, wkt};
use geojson::Feature;

use crate::geo::error::GeoError;
use crate::geo::{Corridors, Route, centroid};

const DELHI_MUMBAI: Route = Route {
    from: [77.1, 28.6],
    to: [72.87, 19.07],
};

fn feature(value: geojson::Value) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(value)),
        id: None,
        properties: None,
        foreign_members: None,
    }
}

fn polygon_feature(polygon: &Polygon<f64>) -> Feature {
    feature(geojson::Value::from(polygon))
}

fn corridors() -> Corridors {
    Corridors::new(&[DELHI_MUMBAI], 60.0).expect("Could not build corridors")
}

#[test]
fn corridor_covers_buffered_points() {
    let corridors = corridors();

    // On the path itself (route midpoint).
    let midpoint = point! { x: 74.985, y: 23.835 };
    assert!(corridors.intersects(&Geometry::Point(midpoint)));

    // ~0.3 degrees perpendicular off the midpoint, inside the 60 km
    // (~0.54 degree) corridor.
    let near = point! { x: 74.711, y: 23.957 };
    assert!(corridors.intersects(&Geometry::Point(near)));

    // ~0.8 degrees perpendicular, beyond the buffer.
    let far = point! { x: 74.254, y: 24.160 };
    assert!(!corridors.intersects(&Geometry::Point(far)));
}

#[test]
fn degenerate_route_buffers_to_circle() {
    let pinned = Route::new([77.1, 28.6], [77.1, 28.6]);
    let corridors = Corridors::new(&[pinned], 60.0).expect("Could not build corridors");

    let near = point! { x: 77.3, y: 28.6 };
    let far = point! { x: 78.5, y: 28.6 };
    assert!(corridors.intersects(&Geometry::Point(near)));
    assert!(!corridors.intersects(&Geometry::Point(far)));
}

#[test]
fn filter_keeps_inside_and_crossing_hazards() {
    let corridors = corridors();

    let inside = wkt! { POLYGON((74.8 23.6,75.2 23.6,75.2 24.0,74.8 24.0,74.8 23.6)) };
    // Straddles the corridor boundary ~0.54 degrees off the path.
    let crossing = wkt! { POLYGON((74.291 23.854,74.691 23.854,74.691 24.254,74.291 24.254,74.291 23.854)) };
    let outside = wkt! { POLYGON((59.0 4.0,61.0 4.0,61.0 6.0,59.0 6.0,59.0 4.0)) };

    let hazards = [
        polygon_feature(&inside),
        polygon_feature(&outside),
        polygon_feature(&crossing),
    ];

    let hits = corridors.filter(&hazards);
    assert_eq!(hits.len(), 2, "Expected inside + crossing hazards only");
    assert_eq!(hits[0], hazards[0]);
    assert_eq!(hits[1], hazards[2]);
}

#[test_log::test]
fn filter_excludes_malformed_geometry() {
    let corridors = corridors();

    let missing = Feature {
        bbox: None,
        geometry: None,
        id: None,
        properties: None,
        foreign_members: None,
    };

    // Self-intersecting exterior over the corridor area. It would
    // intersect if it were valid, exclusion proves the validity gate.
    let bowtie = Polygon::new(
        LineString::from(vec![
            (74.0, 23.0),
            (76.0, 25.0),
            (76.0, 23.0),
            (74.0, 25.0),
            (74.0, 23.0),
        ]),
        vec![],
    );

    let hazards = [missing, polygon_feature(&bowtie)];
    assert!(corridors.filter(&hazards).is_empty());
}

#[test]
fn filter_is_deterministic_and_order_preserving() {
    let corridors = corridors();

    let first = wkt! { POLYGON((74.8 23.6,75.2 23.6,75.2 24.0,74.8 24.0,74.8 23.6)) };
    let second = wkt! { POLYGON((76.9 28.4,77.3 28.4,77.3 28.8,76.9 28.8,76.9 28.4)) };

    let mut tagged = polygon_feature(&first);
    tagged.properties = Some(
        [("hazard".to_owned(), serde_json::json!("TURB"))]
            .into_iter()
            .collect(),
    );

    let hazards = [tagged.clone(), polygon_feature(&second)];

    let once = corridors.filter(&hazards);
    let twice = corridors.filter(&hazards);

    assert_eq!(once, twice, "Filter must be idempotent");
    assert_eq!(once.len(), 2);
    assert_eq!(once[0], tagged, "Properties must pass through untouched");
}

#[test]
fn centroid_of_square() {
    let square = wkt! { POLYGON((10.0 10.0,12.0 10.0,12.0 12.0,10.0 12.0,10.0 10.0)) };
    let center = centroid(&polygon_feature(&square)).expect("Could not take centroid");

    approx::assert_relative_eq!(center.x(), 11.0, epsilon = 1e-9);
    approx::assert_relative_eq!(center.y(), 11.0, epsilon = 1e-9);
}

#[test]
fn centroid_unavailable_without_geometry() {
    let bare = Feature {
        bbox: None,
        geometry: None,
        id: None,
        properties: None,
        foreign_members: None,
    };

    assert!(centroid(&bare).is_none());
}

#[test]
fn rejects_non_positive_buffer() {
    for buffer_km in [0.0, -25.0] {
        match Corridors::new(&[DELHI_MUMBAI], buffer_km) {
            Err(GeoError::NonPositiveBuffer(given)) => assert_eq!(given, buffer_km),
            Ok(_) => panic!("Buffer of {buffer_km} km must be rejected"),
        }
    }
}

#[test]
fn empty_route_set_hits_nothing() {
    let corridors = Corridors::new(&[], 60.0).expect("Could not build corridors");
    let anywhere = wkt! { POLYGON((74.8 23.6,75.2 23.6,75.2 24.0,74.8 24.0,74.8 23.6)) };

    assert!(corridors.filter(&[polygon_feature(&anywhere)]).is_empty());
}
