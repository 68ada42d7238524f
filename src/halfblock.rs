//! Half-block compositor: two pixel rows per character row
//!
//! Each cell shows the top pixel through the upper-half glyph's foreground and
//! the bottom pixel through its background. Transparent halves fall back to
//! the terminal's own background.

use image::Rgba;
use rayon::prelude::*;

use crate::color::Rgb;
use crate::grid::PixelGrid;
use crate::terminal::StyledCell;

/// Alpha above which a pixel is drawn. Faint anti-aliased edges stay blank.
pub const OPACITY_THRESHOLD: u8 = 30;

/// Upper half block `▀`
pub const UPPER_HALF: char = '\u{2580}';
/// Lower half block `▄`
pub const LOWER_HALF: char = '\u{2584}';

fn is_opaque(pixel: Rgba<u8>) -> bool {
    pixel[3] > OPACITY_THRESHOLD
}

/// Pick the glyph and colors for one top/bottom pixel pair.
pub fn halfblock_cell(top: Rgba<u8>, bottom: Rgba<u8>) -> StyledCell {
    match (is_opaque(top), is_opaque(bottom)) {
        (false, false) => StyledCell::blank(),
        (true, true) => StyledCell::two_tone(UPPER_HALF, Rgb::from(top), Rgb::from(bottom)),
        (true, false) => StyledCell::solid(UPPER_HALF, Rgb::from(top)),
        (false, true) => StyledCell::solid(LOWER_HALF, Rgb::from(bottom)),
    }
}

fn render_row(grid: &PixelGrid, y: u32) -> String {
    let mut line = String::new();
    for x in 0..grid.width() {
        let top = grid.pixel(x, y);
        let bottom = if y + 1 < grid.height() { grid.pixel(x, y + 1) } else { Rgba([0, 0, 0, 0]) };
        halfblock_cell(top, bottom).write_to(&mut line);
    }
    line
}

/// Composite an already-sized grid into newline-joined character rows.
///
/// An odd final pixel row is paired with a transparent bottom pixel.
pub fn composite_halfblock(grid: &PixelGrid) -> String {
    let rows: Vec<u32> = (0..grid.height()).step_by(2).collect();
    let lines: Vec<String> = rows.par_iter().map(|&y| render_row(grid, y)).collect();
    lines.join("\n")
}
