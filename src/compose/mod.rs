//! Sequential placement of decoded tiles onto the destination canvas
//!
//! The placement pass accumulates offsets exactly as the sizing pass does:
//! each tile advances the row's x offset by its own width, and each finished
//! row advances the y offset by the row's tallest tile. Given a canvas from
//! [`crate::spatial::layout::canvas_size`], no tile is clipped and no row
//! overlaps the next.

use crate::io::error::{ComposeError, Result};
use crate::spatial::grid::GridShape;
use crate::spatial::layout::CanvasSize;
use image::{DynamicImage, RgbImage, imageops};

/// Paste `tiles` onto a freshly allocated canvas in row-major order
///
/// The canvas is zero-initialized, so cells smaller than their row show black
/// background, matching the RGB destination of the sizing policy. Pixels are
/// replaced, not alpha-blended.
///
/// # Errors
///
/// Returns [`ComposeError::ShapeMismatch`] if `tiles` does not hold exactly
/// one image per grid cell.
pub fn compose(shape: GridShape, tiles: &[DynamicImage], size: CanvasSize) -> Result<RgbImage> {
    if tiles.len() != shape.cell_count() {
        return Err(ComposeError::ShapeMismatch {
            shape,
            supplied: tiles.len(),
        });
    }

    let mut canvas = RgbImage::new(size.width, size.height);
    let mut y: i64 = 0;

    for row in 0..shape.vertical {
        let mut x: i64 = 0;
        let mut row_height: u32 = 0;

        for col in 0..shape.horizontal {
            let Some(tile) = tiles.get(shape.cell_index(row, col)) else {
                continue;
            };
            let pixels = tile.to_rgb8();
            imageops::replace(&mut canvas, &pixels, x, y);
            x += i64::from(pixels.width());
            row_height = row_height.max(pixels.height());
        }

        y += i64::from(row_height);
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid_tile(width: u32, height: u32, luma: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([luma, luma, luma])))
    }

    #[test]
    fn test_single_cell_fills_canvas() {
        let tiles = vec![solid_tile(12, 9, 200)];
        let size = CanvasSize {
            width: 12,
            height: 9,
        };

        let canvas =
            compose(GridShape::new(1, 1), &tiles, size).expect("single cell should compose");

        assert_eq!(canvas.dimensions(), (12, 9));
        assert_eq!(canvas.get_pixel(0, 0), &Rgb([200, 200, 200]));
        assert_eq!(canvas.get_pixel(11, 8), &Rgb([200, 200, 200]));
    }

    #[test]
    fn test_tile_count_must_match_shape() {
        let tiles = vec![solid_tile(4, 4, 10)];
        let size = CanvasSize {
            width: 8,
            height: 4,
        };

        let result = compose(GridShape::new(2, 1), &tiles, size);
        assert!(matches!(
            result,
            Err(ComposeError::ShapeMismatch { supplied: 1, .. })
        ));
    }
}
