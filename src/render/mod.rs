//! Map layer primitives and the adapter seam.
//!
//! The core describes a frame as plain layer data, arcs, filled points,
//! and hazard shapes. What those become on an actual map is entirely the
//! adapter's concern.

#[doc(hidden)]
pub mod adapter;
#[doc(hidden)]
pub mod color;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod layer;

#[doc(inline)]
pub use adapter::{LogRender, RenderAdapter};
#[doc(inline)]
pub use color::{Rgb, Rgba};
#[doc(inline)]
pub use layer::{ArcLayer, FrameLayers, PointLayer, ShapeLayer};
