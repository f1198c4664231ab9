//! Tile decoding and canvas export with partial-file rename on save

use crate::io::configuration::PARTIAL_OUTPUT_SUFFIX;
use crate::io::error::{ComposeError, Result};
use image::{DynamicImage, RgbImage};
use std::path::{Path, PathBuf};

/// Decode a single source tile
///
/// The underlying file handle is closed when decoding completes or fails.
///
/// # Errors
///
/// Returns [`ComposeError::ImageLoad`] with the failing path when the file
/// cannot be opened or interpreted as an image.
pub fn open_tile(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| ComposeError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode the canvas to `path`, choosing the format from its extension
///
/// The canvas is written to a sibling `<name>.part` file first and renamed
/// over `path` on success, so a failed encode never leaves a truncated file
/// at the destination. Missing parent directories are created.
///
/// # Errors
///
/// Returns [`ComposeError::ImageExport`] when the extension names no
/// supported format or the encoder fails, and [`ComposeError::FileSystem`]
/// when directory creation or the final rename fails.
pub fn save_canvas(canvas: &RgbImage, path: &Path) -> Result<()> {
    let format =
        image::ImageFormat::from_path(path).map_err(|source| ComposeError::ImageExport {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| ComposeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }
    }

    let partial = partial_path(path);

    if let Err(source) = canvas.save_with_format(&partial, format) {
        let _ = std::fs::remove_file(&partial);
        return Err(ComposeError::ImageExport {
            path: path.to_path_buf(),
            source,
        });
    }

    std::fs::rename(&partial, path).map_err(|source| {
        let _ = std::fs::remove_file(&partial);
        ComposeError::FileSystem {
            path: path.to_path_buf(),
            operation: "rename partial output",
            source,
        }
    })
}

// The partial file sits next to the destination so the rename stays on one
// filesystem
fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(PARTIAL_OUTPUT_SUFFIX);
    path.with_file_name(name)
}
