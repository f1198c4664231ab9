//! Spatial data structures for the tile grid
//!
//! This module contains the grid geometry:
//! - Row-major cell addressing for the output grid
//! - Two-pass canvas sizing over heterogeneous tile dimensions

/// Grid shape and row-major cell addressing
pub mod grid;
/// Canvas sizing from per-row tile packing
pub mod layout;

pub use grid::GridShape;
pub use layout::CanvasSize;
