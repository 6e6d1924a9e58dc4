use geo::Point;

use crate::pulse::style::{PulseStyle, SeverityRadii};
use crate::pulse::RING_STEP;

/// One concentric animated marker of a pulse: a disc radius in metres
/// and a fill opacity. Derived fresh every tick, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseRing {
    pub center: Point<f64>,
    pub radius: f64,
    pub opacity: u8,
}

/// Computes the ring set of one pulse at an animation phase.
///
/// Ring `i` sweeps from `max_radius * i * RING_STEP` outwards as the
/// phase rises. A ring growing past the maximum wraps by a single
/// subtraction of `max_radius`, restarting the sweep near the centre.
///
/// The wrap is a single subtraction, not a modulo: a ring can exceed the
/// maximum again once `phase + i * RING_STEP` passes 2, which needs a
/// ring index of 6 or more. Known quirk, kept to match the rendered
/// sweep exactly.
pub fn pulse_rings(
    center: Point<f64>,
    style: &PulseStyle,
    radii: &SeverityRadii,
    phase: f64,
    ring_count: usize,
) -> Vec<PulseRing> {
    let max_radius = style.max_radius(radii);

    (0..ring_count)
        .map(|ring| {
            let mut radius = max_radius * (phase + ring as f64 * RING_STEP);
            if radius > max_radius {
                radius -= max_radius;
            }

            PulseRing {
                center,
                radius,
                opacity: style.opacity(phase, ring),
            }
        })
        .collect()
}
