//! Configuration loading and discovery for `img2term.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::Img2TermConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::RenderMode;

/// File name searched for during discovery
pub const CONFIG_FILE_NAME: &str = "img2term.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "IMG2TERM_CONFIG";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse img2term.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override render mode
    pub mode: Option<RenderMode>,
    /// Override width token
    pub width: Option<String>,
}

/// Find a config file.
///
/// Search order:
/// 1. `IMG2TERM_CONFIG` environment variable
/// 2. Walk up from current directory looking for img2term.toml
/// 3. Check XDG_CONFIG_HOME/img2term/img2term.toml (or ~/.config/img2term/img2term.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find img2term.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("img2term").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find img2term.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the
/// default configuration.
pub fn load_config(path: Option<&Path>) -> Result<Img2TermConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            log::debug!("loading config from {}", p.display());
            load_config_file(&p)
        }
        None => Ok(Img2TermConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<Img2TermConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: Img2TermConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut Img2TermConfig, overrides: &CliOverrides) {
    if let Some(mode) = overrides.mode {
        config.render.mode = mode;
    }

    if let Some(ref width) = overrides.width {
        config.render.width = width.clone();
    }
}
