//! Grayshift Core - image conversion library
//!
//! This crate provides the core functionality for Grayshift: decoding an
//! uploaded image, converting it with one of four fixed modes (grayscale,
//! black/white, gray 1/2, gray 1/4), encoding the result as JPEG and making
//! it available for download.
//!
//! The host UI owns the uploaded grid and the chosen mode and passes both
//! into [`convert`] (or [`Converter::run`]) on every button press.

pub mod config;
pub mod decode;
pub mod encode;
pub mod export;
pub mod pipeline;
pub mod transform;

#[cfg(test)]
mod fixtures;

pub use decode::{decode, decode_upload, ChannelLayout, DecodeError, DecodeLimits, PixelGrid};
pub use encode::{encode, EncodeError, EncodedImage, OutputFormat};
pub use export::{DataUri, Export, InlineExport, PlatformExport, StorageError};
pub use pipeline::{Conversion, ConvertError, Converter};
pub use transform::{convert, ConversionMode, InvalidInputError};

#[cfg(not(target_arch = "wasm32"))]
pub use export::{StagedDownload, StagedExport};
