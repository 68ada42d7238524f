//! Render command implementation (terminal display)

use std::process::ExitCode;

use log::{debug, warn};

use crate::config::Img2TermConfig;
use crate::error::RenderError;
use crate::renderer::render;
use crate::source::{load, SourceOptions};
use crate::terminal::source_header;
use crate::width::{terminal_columns, WidthSpec};
use crate::RenderMode;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Resolve the configured width token against the current terminal.
fn resolve_width(config: &Img2TermConfig) -> Result<u32, RenderError> {
    let spec = WidthSpec::parse(&config.render.width)?;
    let columns = terminal_columns();
    debug!(
        "terminal columns: {:?} (fallback {})",
        columns, config.terminal.fallback_columns
    );
    spec.resolve(columns, config.terminal.fallback_columns)
}

fn render_source(
    source: &str,
    width: u32,
    mode: RenderMode,
    options: &SourceOptions,
) -> Result<String, RenderError> {
    let grid = load(source, options)?;
    render(grid, width as i64, mode)
}

/// Execute the render command - display every image on stdout.
///
/// Each image is attempted independently; a failure is reported and the
/// remaining images still render.
pub fn run_render(images: &[String], config: &Img2TermConfig) -> ExitCode {
    let width = match resolve_width(config) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    let mode = config.render.mode;
    let options = config.source.options();
    debug!("rendering {} image(s) at {} columns in {:?} mode", images.len(), width, mode);

    let multiple = images.len() > 1;
    let mut failed = 0usize;

    for source in images {
        if multiple {
            println!("\n{}\n", source_header(source));
        }
        match render_source(source, width, mode, &options) {
            Ok(art) => println!("{}", art),
            Err(e) => {
                warn!("failed to render {}: {}", source, e);
                eprintln!("Error: {}", e);
                failed += 1;
            }
        }
        if multiple {
            println!();
        }
    }

    if failed > 0 {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}
