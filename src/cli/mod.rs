//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to the render
//! command implementation.

mod render;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{load_config, merge_cli_overrides, CliOverrides};
use crate::RenderMode;

/// Process exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// img2term - Render images as 24-bit colored Unicode block art
#[derive(Parser, Debug)]
#[command(name = "img2term")]
#[command(about = "img2term - Render images as 24-bit colored Unicode block art")]
#[command(version)]
pub struct Cli {
    /// Image file paths or http(s) URLs
    #[arg(required = true)]
    pub images: Vec<String>,

    /// Width: columns (e.g. "200") or percent of terminal (e.g. "50%").
    /// Default: 100% (or render.width from img2term.toml)
    #[arg(short, long, allow_hyphen_values = true)]
    pub width: Option<String>,

    /// Glyph family: half (1x2 pixels per cell) or quad (2x2 pixels per cell)
    #[arg(short, long, value_enum)]
    pub mode: Option<RenderMode>,

    /// Path to an img2term.toml config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

/// Main CLI entry point
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    merge_cli_overrides(&mut config, &CliOverrides { mode: cli.mode, width: cli.width.clone() });

    render::run_render(&cli.images, &config)
}
