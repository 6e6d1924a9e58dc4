use serde::{Deserialize, Serialize};

/// An opaque color as `[r, g, b]` channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

/// A color with an alpha channel, `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb([r, g, b])
    }

    /// Extends the color with a fill opacity.
    pub const fn alpha(self, alpha: u8) -> Rgba {
        let [r, g, b] = self.0;
        Rgba([r, g, b, alpha])
    }
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba([r, g, b, a])
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        rgb.alpha(u8::MAX)
    }
}
