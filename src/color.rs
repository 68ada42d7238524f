//! RGB color triple and the distance/averaging helpers shared by the compositors

use image::Rgba;

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Drop the alpha channel of an RGBA pixel.
    pub fn from_rgba(rgba: Rgba<u8>) -> Self {
        Self { r: rgba[0], g: rgba[1], b: rgba[2] }
    }

    /// Squared Euclidean distance over the R, G and B channels.
    pub fn dist_sq(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Channel-wise average using floor division.
    ///
    /// Returns `None` for an empty slice.
    pub fn average(colors: &[Rgb]) -> Option<Rgb> {
        if colors.is_empty() {
            return None;
        }
        let n = colors.len() as u32;
        let (r, g, b) = colors.iter().fold((0u32, 0u32, 0u32), |(r, g, b), c| {
            (r + c.r as u32, g + c.g as u32, b + c.b as u32)
        });
        Some(Rgb { r: (r / n) as u8, g: (g / n) as u8, b: (b / n) as u8 })
    }
}

impl From<Rgba<u8>> for Rgb {
    fn from(rgba: Rgba<u8>) -> Self {
        Rgb::from_rgba(rgba)
    }
}
