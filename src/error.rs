//! Error types for image acquisition and rendering

use thiserror::Error;

/// Error raised while loading, sizing, or rendering an image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Path not found, network failure, or undecodable image data
    #[error("cannot load image '{source_id}': {reason}")]
    SourceUnavailable { source_id: String, reason: String },
    /// Zero or negative output width, or a zero-sized source image
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
    /// Width token that is neither an integer nor a number followed by '%'
    #[error("invalid width '{0}': expected columns (e.g. \"80\") or percent (e.g. \"50%\")")]
    InvalidWidthSpec(String),
}

impl RenderError {
    pub(crate) fn unavailable(source_id: &str, reason: impl std::fmt::Display) -> Self {
        RenderError::SourceUnavailable { source_id: source_id.to_string(), reason: reason.to_string() }
    }
}
