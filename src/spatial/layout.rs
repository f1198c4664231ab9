//! Canvas sizing from per-row tile packing
//!
//! The sizing policy is asymmetric: the canvas is as wide as the widest row's
//! summed tile widths, and as tall as the sum over rows of each row's tallest
//! tile. Rows of unevenly sized tiles therefore stack without overlap, with
//! background showing wherever a tile is smaller than its row.

use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::io::error::{ComposeError, Result};
use crate::spatial::grid::GridShape;

/// Pixel dimensions of the destination canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
}

/// Compute the canvas size for tiles laid out as `shape`
///
/// `dimensions` holds one (width, height) pair per grid cell in row-major
/// order. Accumulation happens in `u64` so summed extents cannot wrap before
/// the safety limit check.
///
/// # Errors
///
/// Returns [`ComposeError::ShapeMismatch`] if `dimensions` does not hold
/// exactly one entry per cell, and [`ComposeError::CanvasTooLarge`] if either
/// canvas extent would exceed [`MAX_CANVAS_DIMENSION`].
pub fn canvas_size(shape: GridShape, dimensions: &[(u32, u32)]) -> Result<CanvasSize> {
    if dimensions.len() != shape.cell_count() {
        return Err(ComposeError::ShapeMismatch {
            shape,
            supplied: dimensions.len(),
        });
    }

    let mut width: u64 = 0;
    let mut height: u64 = 0;

    for row in 0..shape.vertical {
        let mut row_width: u64 = 0;
        let mut row_height: u64 = 0;

        for col in 0..shape.horizontal {
            let (tile_width, tile_height) = dimensions
                .get(shape.cell_index(row, col))
                .copied()
                .unwrap_or((0, 0));
            row_width += u64::from(tile_width);
            row_height = row_height.max(u64::from(tile_height));
        }

        width = width.max(row_width);
        height += row_height;
    }

    if width > MAX_CANVAS_DIMENSION || height > MAX_CANVAS_DIMENSION {
        return Err(ComposeError::CanvasTooLarge { width, height });
    }

    Ok(CanvasSize {
        width: width as u32,
        height: height as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widest_row_sets_width() {
        // Row 0 packs to 30px, row 1 to 41px
        let dims = vec![(10, 5), (20, 5), (40, 7), (1, 3)];
        let size = canvas_size(GridShape::new(2, 2), &dims);

        assert!(matches!(
            size,
            Ok(CanvasSize {
                width: 41,
                height: 12
            })
        ));
    }

    #[test]
    fn test_dimension_count_must_match_shape() {
        let dims = vec![(10, 10); 5];
        let result = canvas_size(GridShape::new(3, 2), &dims);

        assert!(matches!(
            result,
            Err(ComposeError::ShapeMismatch { supplied: 5, .. })
        ));
    }

    #[test]
    fn test_summed_extent_is_capped() {
        let dims = vec![(u32::MAX, 1), (u32::MAX, 1)];
        let result = canvas_size(GridShape::new(2, 1), &dims);

        assert!(matches!(result, Err(ComposeError::CanvasTooLarge { .. })));
    }
}
