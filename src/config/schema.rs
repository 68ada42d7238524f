//! Configuration schema types for `img2term.toml`

use serde::{Deserialize, Serialize};

use crate::source::SourceOptions;
use crate::width::{WidthSpec, DEFAULT_TERMINAL_COLUMNS};
use crate::RenderMode;

/// Rendering defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Compositor used when `--mode` is not given
    #[serde(default)]
    pub mode: RenderMode,
    /// Width token used when `--width` is not given
    #[serde(default = "default_width")]
    pub width: String,
}

fn default_width() -> String {
    "100%".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { mode: RenderMode::default(), width: default_width() }
    }
}

/// Terminal settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Columns assumed for percentage widths when stdout is not a terminal
    #[serde(default = "default_fallback_columns")]
    pub fallback_columns: u16,
}

fn default_fallback_columns() -> u16 {
    DEFAULT_TERMINAL_COLUMNS
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self { fallback_columns: default_fallback_columns() }
    }
}

/// Image fetching settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// `User-Agent` header for http(s) sources
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    SourceOptions::default().user_agent
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self { user_agent: default_user_agent() }
    }
}

impl SourceConfig {
    pub fn options(&self) -> SourceOptions {
        SourceOptions { user_agent: self.user_agent.clone() }
    }
}

/// Root of `img2term.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Img2TermConfig {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub terminal: TerminalConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "render.width")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "img2term.toml: '{}' {}", self.field, self.message)
    }
}

impl Img2TermConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if let Err(e) = WidthSpec::parse(&self.render.width) {
            errors.push(ConfigValidationError {
                field: "render.width".to_string(),
                message: e.to_string(),
            });
        }

        if self.terminal.fallback_columns == 0 {
            errors.push(ConfigValidationError {
                field: "terminal.fallback_columns".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if self.source.user_agent.trim().is_empty() {
            errors.push(ConfigValidationError {
                field: "source.user_agent".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        errors
    }
}
