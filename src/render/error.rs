#[derive(Debug)]
pub enum RenderError {
    /// The display surface rejected a frame. Not retried automatically,
    /// the animation loop reports it and stops.
    Surface(String),
}
