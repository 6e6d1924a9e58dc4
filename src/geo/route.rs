use geo::{Line, Point, point};
use serde::{Deserialize, Serialize};

/// `Route`
/// An origin → destination pair in decimal degrees, `[lon, lat]`.
///
/// Routes are immutable, defined once at startup, and identified by their
/// index in the configured route list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub from: [f64; 2],
    pub to: [f64; 2],
}

impl Route {
    pub fn new(from: [f64; 2], to: [f64; 2]) -> Self {
        Route { from, to }
    }

    pub fn origin(&self) -> Point<f64> {
        point! { x: self.from[0], y: self.from[1] }
    }

    pub fn destination(&self) -> Point<f64> {
        point! { x: self.to[0], y: self.to[1] }
    }

    /// The route's path as a straight planar segment.
    pub fn line(&self) -> Line<f64> {
        Line::new(self.origin().0, self.destination().0)
    }
}
