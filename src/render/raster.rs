/// Raster output via the `image` crate
use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageOutputFormat, Luma};

use crate::error::{QrError, Result};
use crate::models::Matrix;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Largest raster side length in pixels
pub const MAX_RASTER_SIDE: u32 = 16_384;

/// Rasterize `matrix` with `scale` pixels per module and `margin` light modules of border.
///
/// Fails with [`QrError::RasterTooLarge`] when the side would exceed [`MAX_RASTER_SIDE`].
pub fn to_luma_image(matrix: &Matrix, scale: u32, margin: u32) -> Result<GrayImage> {
    let scale = scale.max(1);
    let modules = u64::from(margin)
        .saturating_mul(2)
        .saturating_add(matrix.size() as u64);
    let side = modules.saturating_mul(u64::from(scale));
    let side = u32::try_from(side)
        .ok()
        .filter(|&s| s <= MAX_RASTER_SIDE)
        .ok_or(QrError::RasterTooLarge {
            side,
            max: MAX_RASTER_SIDE,
        })?;
    let dark = matrix.to_bit_matrix();

    Ok(GrayImage::from_fn(side, side, |x, y| {
        let col = (x / scale).checked_sub(margin);
        let row = (y / scale).checked_sub(margin);
        match (row, col) {
            (Some(row), Some(col)) if dark.get(row as usize, col as usize) => DARK,
            _ => LIGHT,
        }
    }))
}

/// Rasterize `matrix` and encode it as PNG bytes
pub fn to_png(matrix: &Matrix, scale: u32, margin: u32) -> Result<Vec<u8>> {
    let image = DynamicImage::ImageLuma8(to_luma_image(matrix, scale, margin)?);
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageOutputFormat::Png)?;
    Ok(buffer.into_inner())
}
