//! Radar-style pulse rings at hazard and anomaly positions.
//!
//! A pulse is a set of concentric rings whose radii sweep outwards with
//! the animation phase and whose opacity decays as they grow. Two
//! policies share the same radius skeleton: a severity-tiered style for
//! fixed anomaly markers, and a uniform style for generic hazard hits
//! that carry no severity.

#[doc(hidden)]
pub mod ring;
#[doc(hidden)]
pub mod style;

#[doc(inline)]
pub use ring::{PulseRing, pulse_rings};
#[doc(inline)]
pub use style::{PulseStyle, SeverityRadii};

/// Phase offset between consecutive rings of one pulse.
pub const RING_STEP: f64 = 0.2;

/// Rings rendered per pulse unless configured otherwise.
pub const DEFAULT_RING_COUNT: usize = 3;
