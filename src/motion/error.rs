#[derive(Debug)]
pub enum MotionError {
    /// A path needs at least two interpolation points to span a route.
    InsufficientResolution(usize),
    /// A fraction along the route could not be interpolated.
    Interpolation(f64),
    /// The frame index exceeded the path resolution. Frame indices are
    /// produced modulo the resolution, so this is a clock contract bug
    /// and must abort the tick rather than clamp.
    FrameOutOfRange { frame: usize, resolution: usize },
}
