//! Wall-clock derivation of the animation state.
//!
//! Both functions here are pure: every tick re-derives its phase and frame
//! index from an absolute epoch-millisecond reading, never from a stored
//! counter, so a slow tick cannot accumulate drift.

#[doc(hidden)]
pub mod clock;

#[doc(inline)]
pub use clock::{DEFAULT_CYCLE_MS, frame_index, phase};
