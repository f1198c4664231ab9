//! Command-line interface for composing source images into a tiled canvas

use crate::compose::compose;
use crate::io::error::{ComposeError, Result};
use crate::io::image::{open_tile, save_canvas};
use crate::io::progress::ProgressManager;
use crate::spatial::grid::GridShape;
use crate::spatial::layout::canvas_size;
use clap::{CommandFactory, Parser};
use image::GenericImageView;
use std::path::PathBuf;

const LAYOUT_HELP: &str = "\
Source images fill the grid left to right, top to bottom:

  +---+---+---+
  | 0 | 1 | 2 |
  +---+---+---+
  | 3 | 4 | 5 |
  +---+---+---+

  gridcat 3 2 result.png a.png b.png c.png d.png e.png f.png";

#[derive(Parser)]
#[command(name = "gridcat")]
#[command(
    author,
    version,
    about = "Concatenate images into a grid-aligned canvas",
    after_help = LAYOUT_HELP
)]
/// Command-line arguments for the image concatenation tool
pub struct Cli {
    /// Horizontal tile count of the output grid
    #[arg(value_name = "H", value_parser = clap::value_parser!(u32).range(1..))]
    pub horizontal: u32,

    /// Vertical tile count of the output grid
    #[arg(value_name = "V", value_parser = clap::value_parser!(u32).range(1..))]
    pub vertical: u32,

    /// Output image path; the format is chosen from its extension
    #[arg(value_name = "OUT_NAME")]
    pub out: PathBuf,

    /// Source images in row-major order, one per grid cell
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Grid shape from the positional tile counts
    pub const fn shape(&self) -> GridShape {
        GridShape::new(self.horizontal, self.vertical)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates a single composition run
pub struct TileProcessor {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl TileProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);

        Self { cli, progress }
    }

    /// Validate the grid, decode every tile, compose and save the canvas
    ///
    /// With no `FILE` arguments the help text is printed and the run counts
    /// as a success, mirroring an invocation with `--help`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file count does not fill the grid, a source
    /// is missing or fails to decode, the computed canvas exceeds the safety
    /// limit, or the output cannot be encoded.
    pub fn run(&mut self) -> Result<()> {
        if self.cli.files.is_empty() {
            let _ = Cli::command().print_help();
            return Ok(());
        }

        let shape = self.cli.shape();
        if shape.cell_count() != self.cli.files.len() {
            return Err(ComposeError::ShapeMismatch {
                shape,
                supplied: self.cli.files.len(),
            });
        }

        // The original tool validated existence before any decoding
        for path in &self.cli.files {
            if !path.is_file() {
                return Err(ComposeError::MissingInput { path: path.clone() });
            }
        }

        if let Some(ref mut pm) = self.progress {
            pm.initialize(self.cli.files.len());
        }

        // Decode once and keep handles in grid order; both the sizing and
        // placement passes read the same decoded data
        let mut tiles = Vec::with_capacity(self.cli.files.len());
        for path in &self.cli.files {
            let tile = open_tile(path)?;
            if let Some(ref pm) = self.progress {
                pm.tile_loaded(path);
            }
            tiles.push(tile);
        }

        if let Some(ref pm) = self.progress {
            pm.finish();
        }

        let dimensions: Vec<(u32, u32)> = tiles.iter().map(GenericImageView::dimensions).collect();
        let size = canvas_size(shape, &dimensions)?;
        let canvas = compose(shape, &tiles, size)?;

        save_canvas(&canvas, &self.cli.out)
    }
}
