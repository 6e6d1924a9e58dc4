use geo::{Centroid, Geometry, Point};
use geojson::Feature;

/// Parses a hazard feature's geometry into planar geometry.
///
/// Returns `None` when the feature carries no geometry or the geometry
/// cannot be represented, the caller treats both as "not relevant".
pub fn parsed_geometry(feature: &Feature) -> Option<Geometry<f64>> {
    feature
        .geometry
        .as_ref()
        .and_then(|geometry| Geometry::try_from(geometry).ok())
}

/// The geometric centroid of a hazard feature, used to place pulse rings
/// inside hazard polygons.
pub fn centroid(feature: &Feature) -> Option<Point<f64>> {
    parsed_geometry(feature).and_then(|geometry| geometry.centroid())
}
