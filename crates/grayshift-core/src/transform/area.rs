//! Area-averaging downsample by an integer factor.
//!
//! Each output sample is the rounded mean of the `divisor x divisor` block of
//! source samples it covers. Output dimensions are floor-divided, so any
//! trailing rows or columns that do not fill a whole block are cropped away
//! before resampling.

use fast_image_resize as fr;

use super::{grayscale, validate, InvalidInputError};
use crate::decode::{ChannelLayout, PixelGrid};

/// Output dimensions for a downsample by `divisor`.
#[inline]
pub fn scaled_dimensions(width: u32, height: u32, divisor: u32) -> (u32, u32) {
    if divisor == 0 {
        return (0, 0);
    }
    (width / divisor, height / divisor)
}

/// Downsample a grid by `divisor` in both axes, averaging over each block.
///
/// Works on any channel layout; channels are averaged independently. A box
/// filter over a source region that is an exact multiple of the output size
/// covers each `divisor x divisor` block and nothing else.
///
/// # Errors
///
/// Returns `InvalidInputError::Empty`, `BufferMismatch` or `Oversized` for a
/// malformed grid, `InvalidInputError::ZeroDivisor` for a zero divisor,
/// `InvalidInputError::TooSmall` if either output dimension would be zero,
/// and `InvalidInputError::Resize` if the resampler fails.
pub fn downsample_area(grid: &PixelGrid, divisor: u32) -> Result<PixelGrid, InvalidInputError> {
    validate(grid)?;
    if divisor == 0 {
        return Err(InvalidInputError::ZeroDivisor);
    }
    if divisor == 1 {
        return Ok(grid.clone());
    }

    let (out_width, out_height) = scaled_dimensions(grid.width, grid.height, divisor);
    if out_width == 0 || out_height == 0 {
        return Err(InvalidInputError::TooSmall {
            width: grid.width,
            height: grid.height,
            divisor,
        });
    }

    let pixel_type = pixel_type(grid.layout);
    let src = fr::images::Image::from_vec_u8(grid.width, grid.height, grid.pixels.clone(), pixel_type)
        .map_err(|e| InvalidInputError::Resize(e.to_string()))?;
    let mut dst = fr::images::Image::new(out_width, out_height, pixel_type);

    let options = fr::ResizeOptions::new()
        .resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Box))
        .crop(
            0.0,
            0.0,
            f64::from(out_width * divisor),
            f64::from(out_height * divisor),
        );

    fr::Resizer::new()
        .resize(&src, &mut dst, Some(&options))
        .map_err(|e| InvalidInputError::Resize(e.to_string()))?;

    Ok(PixelGrid::new(out_width, out_height, grid.layout, dst.into_vec()))
}

fn pixel_type(layout: ChannelLayout) -> fr::PixelType {
    match layout {
        ChannelLayout::Gray => fr::PixelType::U8,
        ChannelLayout::Bgr => fr::PixelType::U8x3,
    }
}

/// Grayscale, then halve both dimensions.
pub fn gray_half(grid: &PixelGrid) -> Result<PixelGrid, InvalidInputError> {
    downsample_area(&grayscale(grid)?, 2)
}

/// Grayscale, then quarter both dimensions.
pub fn gray_quarter(grid: &PixelGrid) -> Result<PixelGrid, InvalidInputError> {
    downsample_area(&grayscale(grid)?, 4)
}
