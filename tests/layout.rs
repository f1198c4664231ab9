//! Validates canvas sizing over uniform and unevenly sized tile grids

use gridcat::ComposeError;
use gridcat::spatial::grid::GridShape;
use gridcat::spatial::layout::{CanvasSize, canvas_size};

// Tests that a uniform grid multiplies tile extents by the tile counts
// Verified by swapping the horizontal and vertical counts
#[test]
fn test_uniform_grid_size() {
    let dims = vec![(100, 50); 6];
    let size = canvas_size(GridShape::new(3, 2), &dims);

    assert!(matches!(
        size,
        Ok(CanvasSize {
            width: 300,
            height: 100
        })
    ));
}

// Tests that the canvas width is the widest row's summed tile widths
// Verified by forcing the narrow row to set the width
#[test]
fn test_width_is_max_over_row_sums() {
    // Row 0 packs to 120px, row 1 to 95px
    let dims = vec![(50, 10), (70, 10), (90, 10), (5, 10)];
    let size = canvas_size(GridShape::new(2, 2), &dims);

    assert!(matches!(
        size,
        Ok(CanvasSize {
            width: 120,
            height: 20
        })
    ));
}

// Tests that the canvas height sums each row's tallest tile
// Verified by averaging row heights instead of taking the max
#[test]
fn test_height_sums_row_maxima() {
    let dims = vec![(50, 80), (70, 40)];
    let size = canvas_size(GridShape::new(2, 1), &dims);

    assert!(matches!(
        size,
        Ok(CanvasSize {
            width: 120,
            height: 80
        })
    ));
}

// Tests the degenerate single-cell grid
// Verified by sizing against a fixed cell extent
#[test]
fn test_single_cell_matches_image() {
    let dims = vec![(37, 21)];
    let size = canvas_size(GridShape::new(1, 1), &dims);

    assert!(matches!(
        size,
        Ok(CanvasSize {
            width: 37,
            height: 21
        })
    ));
}

// Tests that a dimension list shorter than the grid is rejected
// Verified by removing the length check
#[test]
fn test_shape_mismatch_is_rejected() {
    let dims = vec![(100, 50); 5];
    let result = canvas_size(GridShape::new(3, 2), &dims);

    match result {
        Err(ComposeError::ShapeMismatch { shape, supplied }) => {
            assert_eq!(shape.cell_count(), 6);
            assert_eq!(supplied, 5);
        }
        _ => unreachable!("expected a shape mismatch"),
    }
}

// Tests the allocation safety limit on summed extents
// Verified by lowering the limit below the test dimensions
#[test]
fn test_oversized_canvas_is_rejected() {
    let dims = vec![(u32::MAX, 1), (u32::MAX, 1)];
    let result = canvas_size(GridShape::new(2, 1), &dims);

    assert!(matches!(result, Err(ComposeError::CanvasTooLarge { .. })));
}
