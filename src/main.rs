use log::info;

use skypulse::config::RadarConfig;
use skypulse::feed::parse_collection;
use skypulse::geo::Corridors;
use skypulse::render::LogRender;
use skypulse::{Scene, Ticker};

/// Runs the radar loop against the built-in demo configuration, logging
/// each frame instead of drawing it. An optional first argument names a
/// hazard GeoJSON snapshot to filter and overlay.
fn main() -> skypulse::Result<()> {
    env_logger::init();

    let config = RadarConfig::default();
    let corridors = Corridors::new(&config.routes, config.buffer_km)?;

    let hits = match std::env::args_os().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            corridors.filter(&parse_collection(&raw))
        }
        None => Vec::new(),
    };
    info!("{} hazard(s) intersect the route corridors", hits.len());

    let mut scene = Scene::new(config.clone())?;
    scene.update_hazards(hits);

    // Ten seconds of frames at the configured rate.
    let budget = u64::from(config.frame_rate) * 10;
    Ticker::new(config.tick_interval())
        .with_budget(budget)
        .run(&scene, &mut LogRender::default())
}
