//! Image encoding for Grayshift.
//!
//! Every conversion is exported in a single fixed format (JPEG at
//! [`JPEG_QUALITY`](crate::config::JPEG_QUALITY)). The resulting
//! [`EncodedImage`] is handed to an [`Export`](crate::export::Export)
//! implementation for download.
//!
//! # Examples
//!
//! ```ignore
//! use grayshift_core::decode::PixelGrid;
//! use grayshift_core::encode::{encode, OutputFormat};
//!
//! let grid = PixelGrid::gray(100, 100, vec![128u8; 100 * 100]);
//! let encoded = encode(&grid, OutputFormat::Jpeg).unwrap();
//! println!("Encoded {} bytes", encoded.len());
//! ```

mod format;
mod jpeg;

pub use format::{EncodedImage, OutputFormat};
pub use jpeg::{encode_jpeg, EncodeError};

use crate::config::JPEG_QUALITY;
use crate::decode::PixelGrid;

/// Encode a grid in the given output format with its fixed quality setting.
pub fn encode(grid: &PixelGrid, format: OutputFormat) -> Result<EncodedImage, EncodeError> {
    let bytes = match format {
        OutputFormat::Jpeg => encode_jpeg(grid, JPEG_QUALITY)?,
    };

    tracing::debug!(
        format = format.extension(),
        width = grid.width,
        height = grid.height,
        bytes = bytes.len(),
        "encoded image"
    );

    Ok(EncodedImage::new(bytes, format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{decode, DecodeLimits};
    use crate::fixtures::{encode_fixture, gradient_rgb};
    use crate::transform::{convert, ConversionMode};

    #[test]
    fn test_encode_tags_format() {
        let grid = PixelGrid::gray(8, 8, vec![0; 64]);
        let encoded = encode(&grid, OutputFormat::Jpeg).unwrap();

        assert_eq!(encoded.format(), OutputFormat::Jpeg);
        assert_eq!(&encoded.bytes()[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_empty_grid() {
        let grid = PixelGrid::gray(0, 0, vec![]);
        assert!(matches!(
            encode(&grid, OutputFormat::Jpeg),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_decode_encode_decode_keeps_dimensions() {
        let limits = DecodeLimits::default();
        let upload = encode_fixture(&gradient_rgb(73, 41), image::ImageFormat::Png);

        let first = decode(&upload, &limits).unwrap();
        let encoded = encode(&first, OutputFormat::Jpeg).unwrap();
        let second = decode(encoded.bytes(), &limits).unwrap();

        assert_eq!((second.width, second.height), (first.width, first.height));
    }

    #[test]
    fn test_quarter_of_100x80_decodes_to_25x20() {
        let limits = DecodeLimits::default();
        let upload = encode_fixture(&gradient_rgb(100, 80), image::ImageFormat::Jpeg);

        let grid = decode(&upload, &limits).unwrap();
        let quarter = convert(&grid, ConversionMode::GrayQuarter).unwrap();
        let encoded = encode(&quarter, OutputFormat::Jpeg).unwrap();
        let decoded = decode(encoded.bytes(), &limits).unwrap();

        assert_eq!((decoded.width, decoded.height), (25, 20));
    }
}
