use geo::{
    Coord, Geometry, Intersects, Line, LineString, MultiPolygon, Polygon, Validation, coord,
    unary_union,
};
use geojson::Feature;
use log::debug;
use wkt::ToWkt;

use crate::geo::error::GeoError;
use crate::geo::feature::parsed_geometry;
use crate::geo::route::Route;
use crate::geo::KM_PER_DEGREE;

/// Sample count for each semicircular capsule cap.
const CAP_SEGMENTS: usize = 16;

/// `Corridors`
/// The buffered regions around a set of route paths, and their union.
///
/// Hazard relevance is tested against the union: a feature is a hit iff
/// its geometry intersects at least one corridor.
///
/// ```rust
/// use skypulse::geo::{Corridors, Route};
///
/// let routes = [Route::new([77.1, 28.6], [72.87, 19.07])];
/// let corridors = Corridors::new(&routes, 60.0).unwrap();
/// assert_eq!(corridors.shapes().len(), 1);
/// ```
pub struct Corridors {
    shapes: Vec<Polygon<f64>>,
    union: MultiPolygon<f64>,
}

impl Corridors {
    /// Buffers every route path by `buffer_km` and unions the result.
    ///
    /// The kilometre distance is converted to a degree radius with the
    /// flat 1° ≈ 111 km approximation.
    pub fn new(routes: &[Route], buffer_km: f64) -> Result<Corridors, GeoError> {
        if !(buffer_km > 0.0) {
            return Err(GeoError::NonPositiveBuffer(buffer_km));
        }

        let radius = buffer_km / KM_PER_DEGREE;
        let shapes = routes
            .iter()
            .map(|route| capsule(&route.line(), radius))
            .collect::<Vec<_>>();

        let union = unary_union(&shapes);
        debug!("Corridor union: {}", union.wkt_string());

        Ok(Corridors { shapes, union })
    }

    /// One buffered polygon per route, in route order.
    pub fn shapes(&self) -> &[Polygon<f64>] {
        &self.shapes
    }

    pub fn union(&self) -> &MultiPolygon<f64> {
        &self.union
    }

    #[inline]
    pub fn intersects(&self, geometry: &Geometry<f64>) -> bool {
        geometry.intersects(&self.union)
    }

    /// Filters hazard features down to those intersecting the corridor
    /// union, preserving input order.
    ///
    /// Features with missing, unparseable, or invalid geometry are
    /// excluded without surfacing an error, malformed upstream data must
    /// not fail the render cycle.
    pub fn filter(&self, features: &[Feature]) -> Vec<Feature> {
        features
            .iter()
            .filter(|feature| match parsed_geometry(feature) {
                Some(geometry) => geometry.is_valid() && self.intersects(&geometry),
                None => false,
            })
            .cloned()
            .collect()
    }
}

/// Expands a segment into a closed capsule: two offset sides joined by
/// sampled semicircular caps. A zero-length segment degenerates to a
/// circle around its start.
fn capsule(line: &Line<f64>, radius: f64) -> Polygon<f64> {
    let delta = line.delta();
    let length = delta.x.hypot(delta.y);

    if length == 0.0 {
        return circle(line.start, radius);
    }

    let heading = delta.y.atan2(delta.x);
    let half_pi = std::f64::consts::FRAC_PI_2;
    let pi = std::f64::consts::PI;

    let mut ring = Vec::with_capacity(2 * (CAP_SEGMENTS + 1));

    // Nose cap: sweep from the left offset at the end, through the
    // heading, to the right offset.
    for step in 0..=CAP_SEGMENTS {
        let theta = heading + half_pi - pi * (step as f64 / CAP_SEGMENTS as f64);
        ring.push(offset(line.end, radius, theta));
    }

    // Tail cap: continue the sweep back around the start.
    for step in 0..=CAP_SEGMENTS {
        let theta = heading - half_pi - pi * (step as f64 / CAP_SEGMENTS as f64);
        ring.push(offset(line.start, radius, theta));
    }

    Polygon::new(LineString::from(ring), vec![])
}

fn circle(center: Coord<f64>, radius: f64) -> Polygon<f64> {
    let tau = std::f64::consts::TAU;
    let steps = 2 * CAP_SEGMENTS;

    let ring = (0..steps)
        .map(|step| offset(center, radius, tau * step as f64 / steps as f64))
        .collect::<Vec<_>>();

    Polygon::new(LineString::from(ring), vec![])
}

#[inline]
fn offset(origin: Coord<f64>, radius: f64, theta: f64) -> Coord<f64> {
    coord! {
        x: origin.x + radius * theta.cos(),
        y: origin.y + radius * theta.sin(),
    }
}
