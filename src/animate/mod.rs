#![doc = include_str!("../../docs/animate.md")]

#[doc(hidden)]
pub mod scene;
#[doc(hidden)]
pub mod ticker;

#[doc(inline)]
pub use scene::Scene;
#[doc(inline)]
pub use ticker::{CancelToken, Ticker};
