//! CLI entry point for grid-aligned image concatenation

use clap::Parser;
use gridcat::io::cli::{Cli, TileProcessor};
use std::process::ExitCode;

// Allow print for surfacing the failure message to the user
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut processor = TileProcessor::new(cli);
    match processor.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
