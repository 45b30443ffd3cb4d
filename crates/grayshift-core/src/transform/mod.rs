//! Pixel transforms: grayscale, black/white, and area-downsampled gray.
//!
//! Every transform is a pure function from a borrowed grid to a new
//! single-channel grid. Nothing is cached between calls.
//!
//! # Transform Order
//!
//! Each mode starts with the same grayscale step:
//! 1. Grayscale (BT.601 luma, BGR order)
//! 2. Threshold at 127 (`BlackWhite` only)
//! 3. Area downsample by 2 or 4 (`GrayHalf` / `GrayQuarter` only)

mod area;
mod luma;
mod mode;
mod threshold;

pub use area::{downsample_area, gray_half, gray_quarter, scaled_dimensions};
pub use luma::{grayscale, luma_bgr};
pub use mode::{convert, ConversionMode};
pub use threshold::{binarize, black_white};

use thiserror::Error;

use crate::decode::PixelGrid;

/// Rejections for grids a transform cannot process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// Width or height is zero.
    #[error("Image has zero width or height")]
    Empty,

    /// Pixel buffer length disagrees with the declared dimensions.
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    BufferMismatch { expected: usize, actual: usize },

    /// A color-only operation received a single-channel grid.
    #[error("Expected a 3-channel color image")]
    NotColor,

    /// Downsampling would produce an empty image.
    #[error("Image {width}x{height} is too small to downsample by {divisor}")]
    TooSmall { width: u32, height: u32, divisor: u32 },

    /// Declared dimensions imply a buffer larger than the address space.
    #[error("Image {width}x{height} is too large to address")]
    Oversized { width: u32, height: u32 },

    /// The resampler rejected the grid.
    #[error("Resize failed: {0}")]
    Resize(String),

    /// Downsample factor of zero.
    #[error("Downsample factor must be at least 1")]
    ZeroDivisor,
}

/// Shared shape checks run before any transform touches the buffer.
pub(crate) fn validate(grid: &PixelGrid) -> Result<(), InvalidInputError> {
    if grid.width == 0 || grid.height == 0 {
        return Err(InvalidInputError::Empty);
    }

    let expected = PixelGrid::expected_len(grid.width, grid.height, grid.layout).ok_or(
        InvalidInputError::Oversized {
            width: grid.width,
            height: grid.height,
        },
    )?;
    if grid.pixels.len() != expected {
        return Err(InvalidInputError::BufferMismatch {
            expected,
            actual: grid.pixels.len(),
        });
    }

    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
