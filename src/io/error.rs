//! Error types for grid composition

use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::spatial::grid::GridShape;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all composition operations
#[derive(Debug)]
pub enum ComposeError {
    /// Supplied file count does not fill the requested grid
    ShapeMismatch {
        /// Requested grid shape
        shape: GridShape,
        /// Number of source images actually supplied
        supplied: usize,
    },

    /// Source path does not point at a regular file
    MissingInput {
        /// Path that failed the existence check
        path: PathBuf,
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the composed canvas to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Computed canvas exceeds the allocation safety limit
    CanvasTooLarge {
        /// Computed canvas width in pixels
        width: u64,
        /// Computed canvas height in pixels
        height: u64,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { shape, supplied } => {
                write!(
                    f,
                    "Invalid shape: {} x {} grid expects {} tiles, got {supplied} files",
                    shape.horizontal,
                    shape.vertical,
                    shape.cell_count()
                )
            }
            Self::MissingInput { path } => {
                write!(f, "Input '{}' is not a regular file", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::CanvasTooLarge { width, height } => {
                write!(
                    f,
                    "Canvas {width}x{height} exceeds the maximum extent of {MAX_CANVAS_DIMENSION}"
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ComposeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for composition results
pub type Result<T> = std::result::Result<T, ComposeError>;
