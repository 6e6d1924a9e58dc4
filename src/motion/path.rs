use geo::{LineInterpolatePoint, LineString, Point};

use crate::geo::Route;
use crate::motion::error::MotionError;

/// `FlightPath`
/// Evenly spaced interpolation points along a route, precomputed once so
/// that per-tick plane placement is a single indexed lookup.
///
/// Interpolation is linear in lon/lat space, not a great-circle path.
/// Index `0` is the route origin and index `resolution - 1` the
/// destination, matching an inclusive linspace.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPath {
    points: Vec<Point<f64>>,
}

impl FlightPath {
    pub fn new(route: &Route, resolution: usize) -> Result<FlightPath, MotionError> {
        if resolution < 2 {
            return Err(MotionError::InsufficientResolution(resolution));
        }

        // A pinned route has nowhere to interpolate towards.
        if route.origin() == route.destination() {
            return Ok(FlightPath {
                points: vec![route.origin(); resolution],
            });
        }

        let path = LineString::from(vec![route.origin(), route.destination()]);
        let last = (resolution - 1) as f64;

        let mut points = Vec::with_capacity(resolution);
        for step in 0..resolution {
            let fraction = step as f64 / last;
            let point = path
                .line_interpolate_point(fraction)
                .ok_or(MotionError::Interpolation(fraction))?;
            points.push(point);
        }

        Ok(FlightPath { points })
    }

    pub fn resolution(&self) -> usize {
        self.points.len()
    }

    /// The plane marker position for a frame index.
    ///
    /// The index must be in `[0, resolution)`. It is produced modulo the
    /// resolution by the frame clock, so an out-of-range value signals a
    /// broken clock contract and fails loudly instead of clamping.
    pub fn position(&self, frame: usize) -> Result<Point<f64>, MotionError> {
        self.points
            .get(frame)
            .copied()
            .ok_or(MotionError::FrameOutOfRange {
                frame,
                resolution: self.points.len(),
            })
    }
}
