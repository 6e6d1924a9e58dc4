use geo::Point;
use geojson::Feature;
use itertools::Itertools;

use crate::config::RadarConfig;
use crate::frame::{frame_index, phase};
use crate::geo::centroid;
use crate::motion::FlightPath;
use crate::pulse::{PulseRing, PulseStyle, pulse_rings};
use crate::render::{ArcLayer, FrameLayers, PointLayer, ShapeLayer};

/// `Scene`
/// The per-refresh snapshot every tick derives its frame from: the
/// configured routes with their precomputed paths, the fixed anomalies,
/// and the latest hazard hits and flight positions.
///
/// Hazards and flights are replaced wholesale when their providers
/// refresh; composing a frame never mutates the scene, so ticks leave no
/// partial state behind.
pub struct Scene {
    config: RadarConfig,
    paths: Vec<FlightPath>,
    hazard_hits: Vec<Feature>,
    flights: Vec<Point<f64>>,
}

impl Scene {
    /// Builds the scene and precomputes one interpolated path per
    /// configured route.
    pub fn new(config: RadarConfig) -> crate::Result<Scene> {
        config.validate()?;

        let paths = config
            .routes
            .iter()
            .map(|route| FlightPath::new(route, config.points_per_route))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Scene {
            config,
            paths,
            hazard_hits: Vec::new(),
            flights: Vec::new(),
        })
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    /// Replaces the hazard snapshot with a filtered hit set.
    pub fn update_hazards(&mut self, hits: Vec<Feature>) {
        self.hazard_hits = hits;
    }

    /// Replaces the live flight position snapshot.
    pub fn update_flights(&mut self, positions: Vec<Point<f64>>) {
        self.flights = positions;
    }

    /// Computes the full layer set for one instant.
    ///
    /// Everything is derived from `now_ms` and the snapshot: the pulse
    /// phase, the plane frame index, and every layer handed to the
    /// render adapter. A frame index outside a path's resolution is a
    /// clock contract violation and aborts the tick.
    pub fn compose(&self, now_ms: u64) -> crate::Result<FrameLayers> {
        let scale = phase(now_ms, self.config.cycle_ms);
        let frame = frame_index(now_ms, self.config.plane_speed, self.config.points_per_route);

        let palette = &self.config.palette;
        let mut layers = FrameLayers::default();

        // Route strokes and the plane marker riding each path.
        let mut planes = Vec::with_capacity(self.paths.len());
        for (route, path) in self.config.routes.iter().zip(&self.paths) {
            layers.arcs.push(ArcLayer {
                source: route.origin(),
                target: route.destination(),
                color: palette.route,
                width: self.config.route_width,
            });
            planes.push(path.position(frame)?);
        }
        layers.points.push(PointLayer::filled(
            planes,
            palette.plane.into(),
            self.config.plane_radius,
        ));

        if !self.flights.is_empty() {
            layers.points.push(PointLayer::filled(
                self.flights.clone(),
                palette.flight.into(),
                self.config.flight_radius,
            ));
        }

        if !self.hazard_hits.is_empty() {
            layers.shapes.push(ShapeLayer {
                features: self.hazard_hits.clone(),
                fill: palette.hazard_fill,
                stroke: palette.hazard_stroke,
                stroke_width: self.config.hazard_stroke_width,
            });
        }

        // Severity-tiered pulses at the fixed anomalies.
        for anomaly in &self.config.anomalies {
            let style = PulseStyle::Tiered {
                severity: anomaly.severity,
            };
            self.push_pulse(&mut layers, anomaly.position(), &style, scale, |ring| {
                anomaly.color.alpha(ring.opacity)
            });
        }

        // Uniform pulses at each hazard hit's centroid. Hits without a
        // usable centroid draw their polygon only.
        for center in self.hazard_hits.iter().filter_map(centroid) {
            self.push_pulse(&mut layers, center, &PulseStyle::Uniform, scale, |ring| {
                palette.pulse.alpha(ring.opacity)
            });
        }

        Ok(layers)
    }

    /// Emits one pulse as single-point layers, largest ring first so the
    /// tighter rings draw on top.
    fn push_pulse<F>(
        &self,
        layers: &mut FrameLayers,
        center: Point<f64>,
        style: &PulseStyle,
        scale: f64,
        fill: F,
    ) where
        F: Fn(&PulseRing) -> crate::render::Rgba,
    {
        let rings = pulse_rings(
            center,
            style,
            &self.config.severity_radii,
            scale,
            self.config.ring_count,
        );

        for ring in rings
            .into_iter()
            .sorted_by(|a, b| b.radius.total_cmp(&a.radius))
        {
            layers
                .points
                .push(PointLayer::filled(vec![ring.center], fill(&ring), ring.radius));
        }
    }
}
