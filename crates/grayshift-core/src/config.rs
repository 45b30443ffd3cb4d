//! Fixed conversion constants.
//!
//! The converter deliberately exposes no tuning knobs for its transforms;
//! only the decode limits can be adjusted by the host (see
//! [`DecodeLimits`](crate::decode::DecodeLimits)).

/// Intensity threshold for black/white conversion. Samples strictly above
/// this value become 255, everything else becomes 0.
pub const BW_THRESHOLD: u8 = 127;

/// JPEG quality used for every export.
pub const JPEG_QUALITY: u8 = 95;

/// File name stem offered for downloads (`converted_image.jpg`).
pub const DOWNLOAD_STEM: &str = "converted_image";

/// Default maximum upload size in bytes (50 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Default maximum decoded edge length in pixels.
pub const DEFAULT_MAX_DIMENSION: u32 = 16_384;
