//! JPEG encoding for export.
//!
//! Gray grids are written as 8-bit luma JPEGs. BGR grids are swapped back
//! to RGB before they reach the encoder.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::borrow::Cow;
use std::io::Cursor;
use thiserror::Error;

use crate::decode::{ChannelLayout, PixelGrid};

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Requested output format is not produced by this encoder
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a pixel grid to JPEG bytes.
///
/// # Arguments
///
/// * `grid` - Gray or BGR pixel grid
/// * `quality` - JPEG quality (1-100, clamped)
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for an empty grid,
/// `EncodeError::InvalidPixelData` if the buffer disagrees with the
/// dimensions, and `EncodeError::EncodingFailed` if the codec fails.
pub fn encode_jpeg(grid: &PixelGrid, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (grid.width, grid.height);
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = PixelGrid::expected_len(width, height, grid.layout)
        .ok_or(EncodeError::InvalidDimensions { width, height })?;
    if grid.pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: grid.pixels.len(),
        });
    }

    let (samples, color): (Cow<'_, [u8]>, ExtendedColorType) = match grid.layout {
        ChannelLayout::Gray => (Cow::Borrowed(&grid.pixels), ExtendedColorType::L8),
        ChannelLayout::Bgr => {
            let mut rgb = grid.pixels.clone();
            for px in rgb.chunks_exact_mut(3) {
                px.swap(0, 2);
            }
            (Cow::Owned(rgb), ExtendedColorType::Rgb8)
        }
    };

    let quality = quality.clamp(1, 100);
    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(&samples, width, height, color)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=50, 1u32..=50)
    }

    proptest! {
        /// Property: Valid gray input always produces a decodable JPEG of the same size.
        #[test]
        fn prop_gray_roundtrip_dimensions((width, height) in dimensions_strategy()) {
            let pixels = (0..width * height).map(|i| (i * 37 % 256) as u8).collect();
            let grid = PixelGrid::gray(width, height, pixels);

            let jpeg = encode_jpeg(&grid, 95).unwrap();
            let decoded = image::load_from_memory(&jpeg).unwrap();

            prop_assert_eq!((decoded.width(), decoded.height()), (width, height));
        }

        /// Property: Same input always produces same output (deterministic).
        #[test]
        fn prop_deterministic_output((width, height) in (1u32..=20, 1u32..=20)) {
            let grid = PixelGrid::bgr(width, height, vec![100u8; (width * height * 3) as usize]);

            prop_assert_eq!(encode_jpeg(&grid, 95).unwrap(), encode_jpeg(&grid, 95).unwrap());
        }

        /// Property: Invalid pixel data length always returns error.
        #[test]
        fn prop_invalid_pixel_length_returns_error(
            (width, height) in dimensions_strategy(),
            extra_or_missing in -10i32..=10,
        ) {
            prop_assume!(extra_or_missing != 0);

            let expected_size = (width as usize) * (height as usize);
            let actual_size = if extra_or_missing > 0 {
                expected_size + extra_or_missing as usize
            } else {
                expected_size.saturating_sub((-extra_or_missing) as usize)
            };
            prop_assume!(actual_size != expected_size);

            let grid = PixelGrid {
                width,
                height,
                layout: ChannelLayout::Gray,
                pixels: vec![128u8; actual_size],
            };

            prop_assert!(
                matches!(encode_jpeg(&grid, 95), Err(EncodeError::InvalidPixelData { .. })),
                "Mismatched pixel data should return InvalidPixelData error"
            );
        }
    }
}
