#[derive(Debug)]
pub enum GeoError {
    /// A corridor buffer distance must be strictly positive kilometres.
    NonPositiveBuffer(f64),
}
