use geo::{Point, point};
use serde::Deserialize;

/// An optional coordinate pair as flight feeds report them, either half
/// may be absent independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct GeoFix {
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

impl GeoFix {
    pub fn point(&self) -> Option<Point<f64>> {
        match (self.longitude, self.latitude) {
            (Some(lon), Some(lat)) => Some(point! { x: lon, y: lat }),
            _ => None,
        }
    }
}

/// `FlightRecord`
/// One entry of the live flight feed. Only the position blocks are
/// typed, everything else the provider sends is irrelevant to the map
/// and ignored during deserialisation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FlightRecord {
    /// In-air telemetry, preferred when usable.
    #[serde(default)]
    pub live: Option<GeoFix>,
    /// Scheduled arrival coordinates, the fallback position.
    #[serde(default)]
    pub arrival: Option<GeoFix>,
}

impl FlightRecord {
    /// The drawable position: live if complete, else the arrival
    /// fallback, else nothing.
    pub fn position(&self) -> Option<Point<f64>> {
        self.live
            .as_ref()
            .and_then(GeoFix::point)
            .or_else(|| self.arrival.as_ref().and_then(GeoFix::point))
    }
}

/// Collects the drawable positions of a feed snapshot. Records without
/// any usable position are skipped, never treated as errors.
pub fn positions(records: &[FlightRecord]) -> Vec<Point<f64>> {
    records.iter().filter_map(FlightRecord::position).collect()
}
