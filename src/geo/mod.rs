#![doc = include_str!("../../docs/geo.md")]

/// Planar degree approximation, 1 degree of arc to kilometres.
///
/// Applied when converting a corridor buffer distance to a degree radius.
/// No geodesic correction is made, see the module documentation.
pub const KM_PER_DEGREE: f64 = 111.0;

#[doc(hidden)]
pub mod corridor;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod feature;
#[doc(hidden)]
pub mod route;
#[cfg(test)]
mod test;

#[doc(inline)]
pub use corridor::Corridors;
#[doc(inline)]
pub use feature::{centroid, parsed_geometry};
#[doc(inline)]
pub use route::Route;
