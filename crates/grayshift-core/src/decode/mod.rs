//! Upload decoding for Grayshift.
//!
//! This module provides functionality for:
//! - Gating uploads by declared extension (jpg, jpeg, png, gif)
//! - Sniffing and decoding JPEG, PNG and GIF containers
//! - Applying EXIF orientation
//! - Enforcing host-imposed size limits
//!
//! # Channel order
//!
//! Decoded grids are in blue-green-red order and say so through
//! [`ChannelLayout::Bgr`]. The grayscale weights in [`crate::transform`]
//! are applied in the same order, and display surfaces should go through
//! [`PixelGrid::to_rgba`] rather than reading samples directly.
//!
//! # Examples
//!
//! ```ignore
//! use grayshift_core::decode::{decode_upload, DecodeLimits};
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let grid = decode_upload(&bytes, "photo.jpg", &DecodeLimits::default()).unwrap();
//! println!("Decoded {}x{} image", grid.width, grid.height);
//! ```

mod reader;
mod types;

pub use reader::{decode, decode_upload};
pub use types::{ChannelLayout, DecodeError, DecodeLimits, Orientation, PixelGrid, UploadFormat};
