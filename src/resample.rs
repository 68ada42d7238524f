//! Target-size computation and Lanczos resampling
//!
//! A terminal cell is roughly twice as tall as it is wide. Half-block mode
//! packs two pixel rows into one cell, which cancels that out. Quadrant mode
//! packs a square 2x2 tile into one cell, so its pixel height is halved.

use image::imageops::{self, FilterType};
use log::debug;

use crate::error::RenderError;
use crate::grid::PixelGrid;
use crate::RenderMode;

/// Compute the pixel dimensions a grid must be resized to before compositing.
///
/// `width` is the requested number of output character columns. The returned
/// height is always even and at least 2, so every character row consumes
/// exactly two pixel rows.
///
/// The scaled height is rounded to the nearest integer with halves rounded
/// away from zero (`2.5` becomes `3`, then `4` after the even round-up).
pub fn target_dimensions(
    source_width: u32,
    source_height: u32,
    width: i64,
    mode: RenderMode,
) -> Result<(u32, u32), RenderError> {
    if width <= 0 {
        return Err(RenderError::InvalidDimensions(format!(
            "output width must be at least 1 column, got {}",
            width
        )));
    }
    if source_width == 0 || source_height == 0 {
        return Err(RenderError::InvalidDimensions(format!(
            "source image is {}x{}",
            source_width, source_height
        )));
    }
    let width = u32::try_from(width).map_err(|_| {
        RenderError::InvalidDimensions(format!("output width {} is too large", width))
    })?;

    let aspect = source_height as f64 / source_width as f64;
    let (px_w, raw_h) = match mode {
        RenderMode::Half => (width, (width as f64 * aspect).round()),
        RenderMode::Quad => {
            let px_w = width.checked_mul(2).ok_or_else(|| {
                RenderError::InvalidDimensions(format!("output width {} is too large", width))
            })?;
            (px_w, (px_w as f64 * aspect * 0.5).round())
        }
    };

    let mut px_h = if raw_h >= u32::MAX as f64 { u32::MAX - 1 } else { raw_h as u32 };
    if px_h % 2 != 0 {
        px_h += 1;
    }
    Ok((px_w, px_h.max(2)))
}

/// Resize `grid` for rendering `width` columns in `mode`.
///
/// Uses a Lanczos3 filter. The grid is returned untouched when it already has
/// the target size.
pub fn resample(grid: PixelGrid, width: i64, mode: RenderMode) -> Result<PixelGrid, RenderError> {
    let (px_w, px_h) = target_dimensions(grid.width(), grid.height(), width, mode)?;
    debug!(
        "resampling {}x{} -> {}x{} ({:?} mode, {} columns)",
        grid.width(),
        grid.height(),
        px_w,
        px_h,
        mode,
        width
    );
    if (px_w, px_h) == (grid.width(), grid.height()) {
        return Ok(grid);
    }
    let resized = imageops::resize(grid.as_image(), px_w, px_h, FilterType::Lanczos3);
    Ok(PixelGrid::from_image(resized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_half_square() {
        assert_eq!(target_dimensions(100, 100, 40, RenderMode::Half).unwrap(), (40, 40));
    }

    #[test]
    fn test_half_rounds_up_to_even() {
        // 3 * 300/100 = 9 -> 10
        assert_eq!(target_dimensions(100, 300, 3, RenderMode::Half).unwrap(), (3, 10));
    }

    #[test]
    fn test_half_rounds_to_nearest() {
        // 10 * 0.57 = 5.7 -> 6
        assert_eq!(target_dimensions(100, 57, 10, RenderMode::Half).unwrap(), (10, 6));
    }

    #[test]
    fn test_quad_aspect_correction() {
        // px_w = 80, px_h = 80 * 1.0 * 0.5 = 40
        assert_eq!(target_dimensions(64, 64, 40, RenderMode::Quad).unwrap(), (80, 40));
        // px_w = 2, px_h = round(1) = 1 -> 2
        assert_eq!(target_dimensions(2, 2, 1, RenderMode::Quad).unwrap(), (2, 2));
    }

    #[test]
    fn test_half_way_rounds_away_from_zero() {
        // 5 * 1/2 = 2.5 -> 3 -> 4
        assert_eq!(target_dimensions(2, 1, 5, RenderMode::Half).unwrap(), (5, 4));
        // 10 * 0.25 * 0.5 = 1.25 -> 1 -> 2; 20 * 0.25 * 0.5 = 2.5 -> 3 -> 4
        assert_eq!(target_dimensions(4, 1, 5, RenderMode::Quad).unwrap(), (10, 2));
        assert_eq!(target_dimensions(4, 1, 10, RenderMode::Quad).unwrap(), (20, 4));
    }

    #[test]
    fn test_height_is_always_even() {
        let sources = [(1, 1), (3, 7), (640, 480), (17, 1000), (1000, 17), (5, 3)];
        for &(sw, sh) in &sources {
            for width in 1..=64 {
                for mode in [RenderMode::Half, RenderMode::Quad] {
                    let (_, h) = target_dimensions(sw, sh, width, mode).unwrap();
                    assert_eq!(h % 2, 0, "{}x{} at {} cols ({:?})", sw, sh, width, mode);
                    assert!(h >= 2);
                }
            }
        }
    }

    #[test]
    fn test_very_wide_source_keeps_one_row() {
        assert_eq!(target_dimensions(10_000, 1, 4, RenderMode::Half).unwrap(), (4, 2));
    }

    #[test]
    fn test_rejects_non_positive_width() {
        for width in [0, -1, -120] {
            assert!(matches!(
                target_dimensions(10, 10, width, RenderMode::Half),
                Err(RenderError::InvalidDimensions(_))
            ));
        }
    }

    #[test]
    fn test_rejects_empty_source() {
        assert!(matches!(
            target_dimensions(0, 10, 5, RenderMode::Quad),
            Err(RenderError::InvalidDimensions(_))
        ));
        assert!(matches!(
            target_dimensions(10, 0, 5, RenderMode::Half),
            Err(RenderError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_resample_produces_target_size() {
        let grid = PixelGrid::from_pixel(30, 20, Rgba([10, 20, 30, 255]));
        let out = resample(grid, 12, RenderMode::Half).unwrap();
        assert_eq!((out.width(), out.height()), (12, 8));
    }

    #[test]
    fn test_resample_same_size_is_identity() {
        let mut grid = PixelGrid::new(2, 2);
        grid.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        grid.put_pixel(1, 1, Rgba([0, 0, 255, 255]));
        let out = resample(grid.clone(), 1, RenderMode::Quad).unwrap();
        assert_eq!(out, grid);
    }

    #[test]
    fn test_resample_rejects_empty_grid() {
        let grid = PixelGrid::new(0, 0);
        assert!(resample(grid, 10, RenderMode::Half).is_err());
    }
}
