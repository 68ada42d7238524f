//! Render entry points: resample a grid, then composite it to terminal text

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::grid::PixelGrid;
use crate::halfblock::composite_halfblock;
use crate::quadblock::composite_quadblock;
use crate::resample::resample;

/// Which glyph family a grid is rendered with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Half blocks: one pixel wide, two pixels tall per cell
    #[default]
    Half,
    /// Quadrant blocks: 2x2 pixels per cell
    Quad,
}

/// Render `grid` at `width` columns with half-block glyphs.
///
/// # Examples
///
/// ```
/// use image::Rgba;
/// use img2term::{render_halfblock, PixelGrid};
///
/// let grid = PixelGrid::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
/// let out = render_halfblock(grid, 2).unwrap();
/// assert_eq!(out.matches('\u{2580}').count(), 2);
/// ```
pub fn render_halfblock(grid: PixelGrid, width: i64) -> Result<String, RenderError> {
    let grid = resample(grid, width, RenderMode::Half)?;
    Ok(composite_halfblock(&grid))
}

/// Render `grid` at `width` columns with quadrant glyphs.
///
/// `width` counts character columns; each column covers two pixels.
pub fn render_quadblock(grid: PixelGrid, width: i64) -> Result<String, RenderError> {
    let grid = resample(grid, width, RenderMode::Quad)?;
    Ok(composite_quadblock(&grid))
}

/// Render with the compositor selected by `mode`.
pub fn render(grid: PixelGrid, width: i64, mode: RenderMode) -> Result<String, RenderError> {
    match mode {
        RenderMode::Half => render_halfblock(grid, width),
        RenderMode::Quad => render_quadblock(grid, width),
    }
}
