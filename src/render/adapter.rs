use log::debug;

use crate::render::error::RenderError;
use crate::render::layer::FrameLayers;

/// The seam between computed frames and an actual map surface.
///
/// Implementations turn layer data into whatever their display
/// technology wants, deck layers, canvas draws, a test buffer. The core
/// never looks behind this trait.
pub trait RenderAdapter {
    fn draw(&mut self, frame: &FrameLayers) -> Result<(), RenderError>;
}

/// Adapter that logs frame shape instead of drawing, for demos and
/// tests.
#[derive(Debug, Default)]
pub struct LogRender {
    pub frames: u64,
}

impl RenderAdapter for LogRender {
    fn draw(&mut self, frame: &FrameLayers) -> Result<(), RenderError> {
        self.frames += 1;
        debug!(
            "Frame {}: {} layers ({} arcs, {} shapes, {} point layers)",
            self.frames,
            frame.layer_count(),
            frame.arcs.len(),
            frame.shapes.len(),
            frame.points.len()
        );
        Ok(())
    }
}
