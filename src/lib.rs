#![doc = include_str!("../README.md")]

pub mod animate;
pub mod config;
pub mod feed;
pub mod frame;
pub mod geo;
pub mod motion;
pub mod pulse;
pub mod render;
pub mod util;

pub use animate::{CancelToken, Scene, Ticker};
pub use config::RadarConfig;

use crate::config::ConfigError;
use crate::geo::error::GeoError;
use crate::motion::error::MotionError;
use crate::render::error::RenderError;

#[derive(Debug)]
pub enum Error {
    Geo(GeoError),
    Motion(MotionError),
    Render(RenderError),
    Config(ConfigError),
    Io(std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl_err!(GeoError, Geo);
impl_err!(MotionError, Motion);
impl_err!(RenderError, Render);
impl_err!(ConfigError, Config);
impl_err!(std::io::Error, Io);
