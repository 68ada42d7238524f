//! img2term - Command-line tool for rendering images as colored block art

use std::process::ExitCode;

use img2term::cli;

fn main() -> ExitCode {
    cli::run()
}
