//! img2term - Library for rendering images as colored terminal block art
//!
//! This library provides functionality to:
//! - Load images from local paths or http(s) URLs
//! - Resample them to a terminal column budget with a Lanczos filter
//! - Composite them with half-block glyphs (1x2 pixels per cell) or
//!   quadrant glyphs (2x2 pixels per cell) in 24-bit ANSI color

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod glyph;
pub mod grid;
pub mod halfblock;
pub mod quadblock;
pub mod renderer;
pub mod resample;
pub mod source;
pub mod terminal;
pub mod width;

pub use error::RenderError;
pub use grid::PixelGrid;
pub use renderer::{render, render_halfblock, render_quadblock, RenderMode};
