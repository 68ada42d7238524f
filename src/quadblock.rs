//! Quadrant-block compositor: one character per 2x2 pixel tile
//!
//! Each tile is split into at most two colors with a tiny 2-means clustering,
//! and the resulting membership mask selects one of the quadrant glyphs.
//! Alpha is ignored in this mode.

use rayon::prelude::*;

use crate::color::Rgb;
use crate::glyph::{glyph_for_mask, FULL_BLOCK, MASK_ALL};
use crate::grid::PixelGrid;
use crate::terminal::StyledCell;

/// Tiles whose most distant pixel pair is closer than this (squared RGB
/// distance) are drawn as a single averaged color.
pub const UNIFORM_THRESHOLD: u32 = 100;

/// Refinement passes used by [`composite_quadblock`].
pub const DEFAULT_ITERATIONS: usize = 2;

/// The four pixels of a 2x2 tile in mask bit order: TL, TR, BL, BR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTile {
    pub pixels: [Rgb; 4],
}

impl RenderTile {
    pub fn new(tl: Rgb, tr: Rgb, bl: Rgb, br: Rgb) -> Self {
        Self { pixels: [tl, tr, bl, br] }
    }

    /// Read the tile whose top-left pixel is `(x, y)`.
    ///
    /// On an odd-sized grid the second column/row is clamped to the last
    /// valid one, so edge tiles repeat their final pixels. `grid` must be
    /// non-empty and `(x, y)` inside it.
    pub(crate) fn from_grid(grid: &PixelGrid, x: u32, y: u32) -> Self {
        let x1 = (x + 1).min(grid.width().saturating_sub(1));
        let y1 = (y + 1).min(grid.height().saturating_sub(1));
        Self::new(
            Rgb::from(grid.pixel(x, y)),
            Rgb::from(grid.pixel(x1, y)),
            Rgb::from(grid.pixel(x, y1)),
            Rgb::from(grid.pixel(x1, y1)),
        )
    }

    pub fn average(&self) -> Rgb {
        Rgb::average(&self.pixels).unwrap_or(Rgb::BLACK)
    }
}

/// Two centroids and the mask of tile positions assigned to `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterState {
    pub a: Rgb,
    pub b: Rgb,
    pub mask: u8,
}

impl ClusterState {
    /// Assign every pixel of `tile` to its nearer centroid, ties going to `a`.
    pub fn assign(tile: &RenderTile, a: Rgb, b: Rgb) -> Self {
        let mask = tile.pixels.iter().enumerate().fold(0u8, |mask, (i, &p)| {
            if p.dist_sq(a) <= p.dist_sq(b) {
                mask | (1 << (3 - i))
            } else {
                mask
            }
        });
        Self { a, b, mask }
    }
}

/// Two-color clustering strategy for a single tile.
pub trait Clusterer {
    /// Initial centroids for `tile`.
    fn seed(&self, tile: &RenderTile) -> (Rgb, Rgb);

    /// Improve the centroids `a` and `b` over `iterations` passes.
    fn refine(&self, tile: &RenderTile, a: Rgb, b: Rgb, iterations: usize) -> (Rgb, Rgb);
}

/// Seeds with the most distant pixel pair, then runs plain 2-means.
#[derive(Debug, Clone, Copy, Default)]
pub struct FarthestPairTwoMeans;

impl Clusterer for FarthestPairTwoMeans {
    fn seed(&self, tile: &RenderTile) -> (Rgb, Rgb) {
        let px = &tile.pixels;
        let (mut si, mut sj) = (0, 1);
        let mut max_d = px[0].dist_sq(px[1]);
        for i in 0..4 {
            for j in (i + 1)..4 {
                let d = px[i].dist_sq(px[j]);
                if d > max_d {
                    max_d = d;
                    si = i;
                    sj = j;
                }
            }
        }
        (px[si], px[sj])
    }

    fn refine(&self, tile: &RenderTile, a: Rgb, b: Rgb, iterations: usize) -> (Rgb, Rgb) {
        let (mut ca, mut cb) = (a, b);
        for _ in 0..iterations {
            let mut group_a = Vec::with_capacity(4);
            let mut group_b = Vec::with_capacity(4);
            for &p in &tile.pixels {
                if p.dist_sq(ca) <= p.dist_sq(cb) {
                    group_a.push(p);
                } else {
                    group_b.push(p);
                }
            }
            // An empty cluster keeps its previous centroid
            if let Some(avg) = Rgb::average(&group_a) {
                ca = avg;
            }
            if let Some(avg) = Rgb::average(&group_b) {
                cb = avg;
            }
        }
        (ca, cb)
    }
}

/// Renders grids as quadrant glyphs using a pluggable [`Clusterer`].
#[derive(Debug, Clone)]
pub struct QuadCompositor<C = FarthestPairTwoMeans> {
    clusterer: C,
    iterations: usize,
}

impl Default for QuadCompositor<FarthestPairTwoMeans> {
    fn default() -> Self {
        Self { clusterer: FarthestPairTwoMeans, iterations: DEFAULT_ITERATIONS }
    }
}

impl<C: Clusterer + Sync> QuadCompositor<C> {
    pub fn new(clusterer: C, iterations: usize) -> Self {
        Self { clusterer, iterations }
    }

    /// Cluster a tile, or `None` when it is flat enough to draw as one color.
    pub fn cluster(&self, tile: &RenderTile) -> Option<ClusterState> {
        let (a, b) = self.clusterer.seed(tile);
        if a.dist_sq(b) < UNIFORM_THRESHOLD {
            return None;
        }
        let (a, b) = self.clusterer.refine(tile, a, b, self.iterations);
        Some(ClusterState::assign(tile, a, b))
    }

    /// Glyph and colors for one tile.
    pub fn tile_cell(&self, tile: &RenderTile) -> StyledCell {
        let Some(state) = self.cluster(tile) else {
            return StyledCell::solid(FULL_BLOCK, tile.average());
        };
        match state.mask {
            MASK_ALL => StyledCell::solid(FULL_BLOCK, state.a),
            0 => StyledCell::solid(FULL_BLOCK, state.b),
            mask => StyledCell::two_tone(glyph_for_mask(mask), state.a, state.b),
        }
    }

    fn render_row(&self, grid: &PixelGrid, y: u32) -> String {
        let mut line = String::new();
        for x in (0..grid.width()).step_by(2) {
            self.tile_cell(&RenderTile::from_grid(grid, x, y)).write_to(&mut line);
        }
        line
    }

    /// Composite an already-sized grid into newline-joined character rows.
    pub fn composite(&self, grid: &PixelGrid) -> String {
        if grid.is_empty() {
            return String::new();
        }
        let rows: Vec<u32> = (0..grid.height()).step_by(2).collect();
        let lines: Vec<String> = rows.par_iter().map(|&y| self.render_row(grid, y)).collect();
        lines.join("\n")
    }
}

/// Composite with farthest-pair seeding and two refinement passes.
pub fn composite_quadblock(grid: &PixelGrid) -> String {
    QuadCompositor::new(FarthestPairTwoMeans, DEFAULT_ITERATIONS).composite(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{MASK_BR, MASK_TL};
    use image::Rgba;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn compositor() -> QuadCompositor {
        QuadCompositor::default()
    }

    fn rgba(c: Rgb) -> Rgba<u8> {
        Rgba([c.r, c.g, c.b, 255])
    }

    #[test]
    fn test_identical_pixels_take_shortcut() {
        let c = Rgb::new(12, 34, 56);
        let tile = RenderTile::new(c, c, c, c);
        let compositor = compositor();
        assert_eq!(compositor.cluster(&tile), None);
        assert_eq!(compositor.tile_cell(&tile), StyledCell::solid(FULL_BLOCK, c));
    }

    #[test]
    fn test_near_uniform_tile_is_averaged() {
        let tile = RenderTile::new(
            Rgb::new(100, 100, 100),
            Rgb::new(104, 100, 100),
            Rgb::new(100, 105, 100),
            Rgb::new(100, 100, 103),
        );
        let cell = compositor().tile_cell(&tile);
        assert_eq!(cell, StyledCell::solid(FULL_BLOCK, Rgb::new(101, 101, 100)));
    }

    #[test]
    fn test_uniform_threshold_is_exclusive() {
        let black = Rgb::new(0, 0, 0);

        // Seeds exactly 100 apart are split into two colors
        let dim_red = Rgb::new(10, 0, 0);
        let tile = RenderTile::new(black, dim_red, black, dim_red);
        assert_eq!(compositor().tile_cell(&tile), StyledCell::two_tone('▌', black, dim_red));

        // Seeds 97 apart collapse to the tile average
        let dim_brown = Rgb::new(9, 4, 0);
        let tile = RenderTile::new(black, dim_brown, black, dim_brown);
        assert_eq!(
            compositor().tile_cell(&tile),
            StyledCell::solid(FULL_BLOCK, Rgb::new(4, 2, 0))
        );
    }

    #[test]
    fn test_checkerboard_gives_diagonal_glyph() {
        let tile = RenderTile::new(RED, BLUE, BLUE, RED);
        let compositor = compositor();
        let state = compositor.cluster(&tile).unwrap();
        assert_eq!(state.mask, MASK_TL | MASK_BR);
        assert_eq!((state.a, state.b), (RED, BLUE));
        let cell = compositor.tile_cell(&tile);
        assert_eq!(cell, StyledCell::two_tone('▚', RED, BLUE));
    }

    #[test]
    fn test_seed_picks_farthest_pair() {
        let tile = RenderTile::new(
            Rgb::new(10, 10, 10),
            Rgb::new(20, 20, 20),
            Rgb::new(250, 250, 250),
            Rgb::new(30, 30, 30),
        );
        let (a, b) = FarthestPairTwoMeans.seed(&tile);
        assert_eq!((a, b), (Rgb::new(10, 10, 10), Rgb::new(250, 250, 250)));
    }

    #[test]
    fn test_refine_averages_members() {
        let dark = Rgb::new(0, 0, 0);
        let darkish = Rgb::new(10, 10, 10);
        let light = Rgb::new(250, 250, 250);
        let tile = RenderTile::new(dark, darkish, light, light);
        let (a, b) = FarthestPairTwoMeans.refine(&tile, dark, light, 2);
        assert_eq!(a, Rgb::new(5, 5, 5));
        assert_eq!(b, light);
        let state = ClusterState::assign(&tile, a, b);
        assert_eq!(state.mask, 0b1100);
    }

    #[test]
    fn test_assign_ties_go_to_first_centroid() {
        let mid = Rgb::new(50, 50, 50);
        let tile = RenderTile::new(mid, mid, mid, mid);
        let state = ClusterState::assign(&tile, Rgb::new(40, 50, 50), Rgb::new(60, 50, 50));
        assert_eq!(state.mask, MASK_ALL);
    }

    struct FixedSeeds(Rgb, Rgb);

    impl Clusterer for FixedSeeds {
        fn seed(&self, _tile: &RenderTile) -> (Rgb, Rgb) {
            (self.0, self.1)
        }

        fn refine(&self, _tile: &RenderTile, a: Rgb, b: Rgb, _iterations: usize) -> (Rgb, Rgb) {
            (a, b)
        }
    }

    #[test]
    fn test_degenerate_masks_render_full_block() {
        let c = Rgb::new(200, 10, 10);
        let tile = RenderTile::new(c, c, c, c);

        // Every pixel lands in A
        let compositor = QuadCompositor::new(FixedSeeds(c, Rgb::new(0, 0, 0)), 0);
        assert_eq!(compositor.tile_cell(&tile), StyledCell::solid(FULL_BLOCK, c));

        // Every pixel lands in B
        let compositor = QuadCompositor::new(FixedSeeds(Rgb::new(0, 0, 0), c), 0);
        assert_eq!(compositor.tile_cell(&tile), StyledCell::solid(FULL_BLOCK, c));
    }

    #[test]
    fn test_odd_grid_edges_are_clamped() {
        let mut grid = PixelGrid::from_pixel(3, 3, rgba(BLUE));
        grid.put_pixel(2, 2, rgba(RED));
        let tile = RenderTile::from_grid(&grid, 2, 2);
        assert_eq!(tile.pixels, [RED; 4]);

        let out = composite_quadblock(&grid);
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("\x1b[38;2;255;0;0m\u{2588}\x1b[0m"));
    }

    #[test]
    fn test_single_column_grid_clamps_right_edge() {
        let mut grid = PixelGrid::from_pixel(1, 2, rgba(RED));
        grid.put_pixel(0, 1, rgba(BLUE));
        let tile = RenderTile::from_grid(&grid, 0, 0);
        assert_eq!(tile.pixels, [RED, RED, BLUE, BLUE]);
        assert_eq!(
            composite_quadblock(&grid),
            "\x1b[38;2;255;0;0m\x1b[48;2;0;0;255m\u{2580}\x1b[0m"
        );
    }

    #[test]
    fn test_single_pixel_grid() {
        let grid = PixelGrid::from_pixel(1, 1, rgba(RED));
        assert_eq!(composite_quadblock(&grid), "\x1b[38;2;255;0;0m\u{2588}\x1b[0m");
    }

    #[test]
    fn test_empty_grid() {
        assert_eq!(composite_quadblock(&PixelGrid::new(0, 0)), "");
    }

    #[test]
    fn test_alpha_is_ignored() {
        let grid = PixelGrid::from_pixel(2, 2, Rgba([0, 255, 0, 0]));
        assert_eq!(composite_quadblock(&grid), "\x1b[38;2;0;255;0m\u{2588}\x1b[0m");
    }
}
