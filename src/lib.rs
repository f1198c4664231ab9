//! Grid-aligned image concatenation
//!
//! The tool lays a set of source images out as an h×v tile grid, sizes a
//! destination canvas from the per-row packing of those tiles, pastes each
//! image at its computed offset, and encodes the canvas to a file.

#![forbid(unsafe_code)]

/// Sequential placement of decoded tiles onto the destination canvas
pub mod compose;
/// Input/output operations and error handling
pub mod io;
/// Grid addressing and canvas sizing
pub mod spatial;

pub use io::error::{ComposeError, Result};
