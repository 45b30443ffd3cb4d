//! Core types for image decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The upload contained no bytes.
    #[error("Empty image buffer")]
    Empty,

    /// The upload or its decoded dimensions exceed the configured limits.
    #[error("Image exceeds size limit: {0}")]
    TooLarge(String),

    /// The container is not one of the supported upload formats.
    #[error("Invalid or unsupported image format")]
    UnsupportedFormat,

    /// The declared file extension is not accepted for upload.
    #[error("Unsupported file extension: {0:?} (expected jpg, jpeg, png or gif)")]
    UnsupportedExtension(String),

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    Corrupted(String),
}

/// Sample order of a [`PixelGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelLayout {
    /// Three channels in blue-green-red order.
    Bgr,
    /// A single intensity channel.
    Gray,
}

impl ChannelLayout {
    /// Number of samples per pixel.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            ChannelLayout::Bgr => 3,
            ChannelLayout::Gray => 1,
        }
    }

    /// Layout for a given channel count, if supported.
    pub fn from_channels(channels: usize) -> Option<Self> {
        match channels {
            3 => Some(ChannelLayout::Bgr),
            1 => Some(ChannelLayout::Gray),
            _ => None,
        }
    }
}

/// Image container formats accepted at the upload boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadFormat {
    Jpeg,
    Png,
    Gif,
}

impl UploadFormat {
    /// File extensions accepted by the upload control.
    pub const EXTENSIONS: [&'static str; 4] = ["jpg", "jpeg", "png", "gif"];

    /// Match a bare extension (without the dot), ignoring case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(UploadFormat::Jpeg),
            "png" => Some(UploadFormat::Png),
            "gif" => Some(UploadFormat::Gif),
            _ => None,
        }
    }

    /// Match the extension of an uploaded file name.
    pub fn from_file_name(file_name: &str) -> Result<Self, DecodeError> {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or_default();
        Self::from_extension(ext).ok_or_else(|| DecodeError::UnsupportedExtension(ext.to_string()))
    }

    /// Identify the container from its magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        match image::guess_format(bytes).ok()? {
            image::ImageFormat::Jpeg => Some(UploadFormat::Jpeg),
            image::ImageFormat::Png => Some(UploadFormat::Png),
            image::ImageFormat::Gif => Some(UploadFormat::Gif),
            _ => None,
        }
    }

    pub(crate) fn to_image_format(self) -> image::ImageFormat {
        match self {
            UploadFormat::Jpeg => image::ImageFormat::Jpeg,
            UploadFormat::Png => image::ImageFormat::Png,
            UploadFormat::Gif => image::ImageFormat::Gif,
        }
    }
}

/// Host-imposed bounds on what the decoder will accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeLimits {
    /// Maximum encoded upload size in bytes.
    pub max_bytes: usize,
    /// Maximum decoded width in pixels.
    pub max_width: u32,
    /// Maximum decoded height in pixels.
    pub max_height: u32,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_bytes: config::DEFAULT_MAX_UPLOAD_BYTES,
            max_width: config::DEFAULT_MAX_DIMENSION,
            max_height: config::DEFAULT_MAX_DIMENSION,
        }
    }
}

impl DecodeLimits {
    /// Limits that accept any input. Only use for trusted sources.
    pub fn unlimited() -> Self {
        Self {
            max_bytes: usize::MAX,
            max_width: u32::MAX,
            max_height: u32::MAX,
        }
    }

    pub(crate) fn to_image_limits(self) -> image::Limits {
        let mut limits = image::Limits::no_limits();
        limits.max_image_width = Some(self.max_width);
        limits.max_image_height = Some(self.max_height);
        limits
    }
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Flip horizontal + rotate 270 CW.
    Transpose = 5,
    Rotate90CW = 6,
    /// Flip horizontal + rotate 90 CW.
    Transverse = 7,
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// An in-memory image: row-major 8-bit samples with a declared channel layout.
///
/// Color grids produced by the decoder are always [`ChannelLayout::Bgr`];
/// every transform produces [`ChannelLayout::Gray`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Sample order of `pixels`.
    pub layout: ChannelLayout,
    /// Sample data. Length should be `width * height * layout.channels()`.
    pub pixels: Vec<u8>,
}

impl PixelGrid {
    pub fn new(width: u32, height: u32, layout: ChannelLayout, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            Some(pixels.len()),
            Self::expected_len(width, height, layout),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            layout,
            pixels,
        }
    }

    /// Create a BGR grid.
    pub fn bgr(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self::new(width, height, ChannelLayout::Bgr, pixels)
    }

    /// Create a single-channel grid.
    pub fn gray(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self::new(width, height, ChannelLayout::Gray, pixels)
    }

    /// Build a BGR grid from an `image::RgbImage`, swapping red and blue.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let mut pixels = img.into_raw();
        for px in pixels.chunks_exact_mut(3) {
            px.swap(0, 2);
        }
        Self {
            width,
            height,
            layout: ChannelLayout::Bgr,
            pixels,
        }
    }

    /// Buffer length implied by the given dimensions and layout.
    ///
    /// Returns `None` if the length does not fit in `usize` (32 bits on wasm).
    #[inline]
    pub fn expected_len(width: u32, height: u32, layout: ChannelLayout) -> Option<usize> {
        usize::try_from(width)
            .ok()?
            .checked_mul(usize::try_from(height).ok()?)?
            .checked_mul(layout.channels())
    }

    /// Number of samples per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Whether the buffer length agrees with the dimensions.
    pub fn has_consistent_buffer(&self) -> bool {
        Self::expected_len(self.width, self.height, self.layout) == Some(self.pixels.len())
    }

    /// Expand to RGBA for display surfaces such as a canvas `ImageData`.
    ///
    /// BGR samples are reordered and gray samples replicated, so the preview
    /// never shows swapped tints.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity((self.pixels.len() / self.channels()).saturating_mul(4));
        match self.layout {
            ChannelLayout::Bgr => {
                for px in self.pixels.chunks_exact(3) {
                    rgba.extend_from_slice(&[px[2], px[1], px[0], 255]);
                }
            }
            ChannelLayout::Gray => {
                for &v in &self.pixels {
                    rgba.extend_from_slice(&[v, v, v, 255]);
                }
            }
        }
        rgba
    }
}
