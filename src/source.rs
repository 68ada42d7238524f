//! Image acquisition from local paths and http(s) URLs

use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::RenderError;
use crate::grid::PixelGrid;

/// Settings for fetching remote images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOptions {
    /// `User-Agent` header sent with http(s) requests
    pub user_agent: String,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self { user_agent: "Mozilla/5.0".to_string() }
    }
}

/// True when `source` should be fetched over the network.
pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Load and decode `source` into an RGBA grid.
///
/// The whole image is fetched and decoded before returning; nothing is
/// rendered from a partial download.
pub fn load(source: &str, options: &SourceOptions) -> Result<PixelGrid, RenderError> {
    let image = if is_url(source) {
        let bytes = fetch(source, options)?;
        debug!("fetched {} bytes from {}", bytes.len(), source);
        image::load_from_memory(&bytes).map_err(|e| RenderError::unavailable(source, e))?
    } else {
        image::open(Path::new(source)).map_err(|e| RenderError::unavailable(source, e))?
    };

    let grid = PixelGrid::from_image(image.to_rgba8());
    debug!("decoded {} as {}x{}", source, grid.width(), grid.height());
    Ok(grid)
}

fn fetch(url: &str, options: &SourceOptions) -> Result<Vec<u8>, RenderError> {
    let resp = ureq::get(url)
        .header("User-Agent", options.user_agent.as_str())
        .call()
        .map_err(|e| RenderError::unavailable(url, e))?;
    let mut bytes = Vec::new();
    resp.into_body()
        .into_reader()
        .read_to_end(&mut bytes)
        .map_err(|e| RenderError::unavailable(url, e))?;
    Ok(bytes)
}
