//! Owned RGBA pixel grid passed between pipeline stages

use image::{Rgba, RgbaImage};

/// A row-major RGBA pixel grid with 8-bit channels.
///
/// Each pipeline stage takes its input grid by value and produces a new one
/// (or a character stream), so no grid is ever read by two stages at once.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    image: RgbaImage,
}

impl PixelGrid {
    /// Create a fully transparent grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::new(width, height) }
    }

    /// Create a grid filled with a single pixel value.
    pub fn from_pixel(width: u32, height: u32, pixel: Rgba<u8>) -> Self {
        Self { image: RgbaImage::from_pixel(width, height, pixel) }
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Pixel at `(x, y)`. Panics when out of bounds, like `RgbaImage::get_pixel`.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, pixel: Rgba<u8>) {
        self.image.put_pixel(x, y, pixel);
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }
}
