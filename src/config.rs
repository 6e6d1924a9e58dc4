//! The configuration surface, read once at startup.
//!
//! Defaults reproduce the demo deployment: three Indian-subcontinent
//! routes, three fixed radar anomalies, and the stock styling
//! constants.

use std::time::Duration;

use geo::{Point, point};
use serde::Deserialize;

use crate::geo::Route;
use crate::pulse::{DEFAULT_RING_COUNT, SeverityRadii};
use crate::render::{Rgb, Rgba};

/// A fixed radar anomaly marker, pulsed with the severity-tiered style.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Anomaly {
    pub lon: f64,
    pub lat: f64,
    pub severity: u8,
    pub color: Rgb,
}

impl Anomaly {
    pub fn position(&self) -> Point<f64> {
        point! { x: self.lon, y: self.lat }
    }
}

/// Fixed styling colors for every layer kind.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub route: Rgb,
    pub plane: Rgb,
    pub flight: Rgb,
    pub hazard_fill: Rgba,
    pub hazard_stroke: Rgba,
    /// Base color of the uniform hazard pulse, alpha applied per ring.
    pub pulse: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            route: Rgb::new(0, 150, 255),
            plane: Rgb::new(255, 255, 255),
            flight: Rgb::new(0, 255, 180),
            hazard_fill: Rgba::new(255, 0, 0, 40),
            hazard_stroke: Rgba::new(255, 0, 0, 160),
            pulse: Rgb::new(255, 60, 0),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid { field: &'static str, value: String },
}

/// `RadarConfig`
/// Everything the radar view derives its frames from. Loaded once at
/// startup, the core never re-reads configuration mid-flight.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    pub routes: Vec<Route>,
    pub anomalies: Vec<Anomaly>,

    /// Corridor half-width in kilometres.
    pub buffer_km: f64,
    /// Pulse animation cycle length.
    pub cycle_ms: u64,
    /// Tick loop target, frames per second.
    pub frame_rate: u32,
    /// Interpolation points per route.
    pub points_per_route: usize,
    /// Plane frame steps per second.
    pub plane_speed: f64,
    /// Concentric rings per pulse.
    pub ring_count: usize,
    pub severity_radii: SeverityRadii,

    /// Provider refresh throttles, seconds.
    pub flight_ttl_secs: u64,
    pub hazard_ttl_secs: u64,

    /// Marker radii in metres, stroke width in pixels.
    pub plane_radius: f64,
    pub flight_radius: f64,
    pub route_width: f32,
    pub hazard_stroke_width: f32,

    pub palette: Palette,
}

impl Default for RadarConfig {
    fn default() -> Self {
        RadarConfig {
            routes: vec![
                // Delhi → Mumbai
                Route::new([77.1, 28.6], [72.87, 19.07]),
                // Delhi → Bengaluru
                Route::new([77.1, 28.6], [77.59, 12.97]),
                // Bengaluru → Kolkata
                Route::new([77.59, 12.97], [88.36, 22.57]),
            ],
            anomalies: vec![
                Anomaly {
                    lon: 76.0,
                    lat: 23.5,
                    severity: 1,
                    color: Rgb::new(255, 255, 0),
                },
                Anomaly {
                    lon: 78.0,
                    lat: 22.0,
                    severity: 2,
                    color: Rgb::new(255, 165, 0),
                },
                Anomaly {
                    lon: 80.0,
                    lat: 21.0,
                    severity: 3,
                    color: Rgb::new(255, 0, 0),
                },
            ],
            buffer_km: 60.0,
            cycle_ms: crate::frame::DEFAULT_CYCLE_MS,
            frame_rate: 30,
            points_per_route: 100,
            plane_speed: 2.0,
            ring_count: DEFAULT_RING_COUNT,
            severity_radii: SeverityRadii::default(),
            flight_ttl_secs: 90,
            hazard_ttl_secs: 180,
            plane_radius: 25_000.0,
            flight_radius: 12_000.0,
            route_width: 3.0,
            hazard_stroke_width: 1.0,
            palette: Palette::default(),
        }
    }
}

impl RadarConfig {
    /// Parses and validates a JSON configuration document. Missing
    /// fields fall back to the defaults.
    pub fn from_json(raw: &str) -> Result<RadarConfig, ConfigError> {
        let config: RadarConfig = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid<T: std::fmt::Display>(
            field: &'static str,
            value: T,
        ) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid {
                field,
                value: value.to_string(),
            })
        }

        if !(self.buffer_km > 0.0) {
            return invalid("buffer_km", self.buffer_km);
        }
        if self.cycle_ms == 0 {
            return invalid("cycle_ms", self.cycle_ms);
        }
        if self.frame_rate == 0 {
            return invalid("frame_rate", self.frame_rate);
        }
        if self.points_per_route < 2 {
            return invalid("points_per_route", self.points_per_route);
        }
        if !(self.plane_speed > 0.0) {
            return invalid("plane_speed", self.plane_speed);
        }
        if self.ring_count == 0 {
            return invalid("ring_count", self.ring_count);
        }

        Ok(())
    }

    /// The tick loop sleep matching the configured frame rate, 33 ms at
    /// the default 30 Hz.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(1000 / self.frame_rate))
    }

    pub fn flight_ttl(&self) -> Duration {
        Duration::from_secs(self.flight_ttl_secs)
    }

    pub fn hazard_ttl(&self) -> Duration {
        Duration::from_secs(self.hazard_ttl_secs)
    }
}
