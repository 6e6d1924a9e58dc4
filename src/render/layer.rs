use geo::Point;
use geojson::Feature;

use crate::render::color::{Rgb, Rgba};

/// A stroked arc between two geographic endpoints, used for route paths.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcLayer {
    pub source: Point<f64>,
    pub target: Point<f64>,
    pub color: Rgb,
    pub width: f32,
}

/// Uniformly styled point markers: plane positions, live flight dots,
/// and individual pulse rings.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLayer {
    pub positions: Vec<Point<f64>>,
    pub fill: Rgba,
    /// Marker radius in metres.
    pub radius: f64,
    pub stroked: bool,
    pub filled: bool,
}

impl PointLayer {
    /// The common case: filled, unstroked discs.
    pub fn filled(positions: Vec<Point<f64>>, fill: Rgba, radius: f64) -> Self {
        PointLayer {
            positions,
            fill,
            radius,
            stroked: false,
            filled: true,
        }
    }
}

/// Hazard features drawn as-is with fixed fill and stroke styling. The
/// features pass through untouched from the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeLayer {
    pub features: Vec<Feature>,
    pub fill: Rgba,
    pub stroke: Rgba,
    pub stroke_width: f32,
}

/// Everything one tick asks the adapter to draw. Layer order is draw
/// order: arcs underneath, shapes above them, point layers on top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameLayers {
    pub arcs: Vec<ArcLayer>,
    pub shapes: Vec<ShapeLayer>,
    pub points: Vec<PointLayer>,
}

impl FrameLayers {
    pub fn layer_count(&self) -> usize {
        self.arcs.len() + self.shapes.len() + self.points.len()
    }
}
