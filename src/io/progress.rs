//! Decode progress reporting

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static DECODE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for the tile-decoding pass
///
/// One bar over the full tile count, labelled with the file most recently
/// decoded. Cleared from the terminal once the run finishes.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Start the decode bar for `tile_count` tiles
    pub fn initialize(&mut self, tile_count: usize) {
        let bar = ProgressBar::new(tile_count as u64);
        bar.set_style(DECODE_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Advance the bar after a tile has been decoded
    pub fn tile_loaded(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            bar.set_message(
                path.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            );
            bar.inc(1);
        }
    }

    /// Clear the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
