//! One button press: transform, encode, export.
//!
//! The host keeps the decoded upload and passes it in with the chosen mode on
//! every call. Nothing is remembered between calls.

use thiserror::Error;

use crate::decode::{self, DecodeError, DecodeLimits, PixelGrid};
use crate::encode::{self, EncodeError, OutputFormat};
use crate::export::{Export, PlatformExport, StorageError};
use crate::transform::{self, ConversionMode, InvalidInputError};

/// Any failure along the conversion path.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result of a conversion: the grid to preview and the download handle.
#[derive(Debug)]
pub struct Conversion<T> {
    pub mode: ConversionMode,
    /// Converted grid for the preview surface (always gray).
    pub preview: PixelGrid,
    /// Size of the encoded download in bytes.
    pub encoded_len: usize,
    pub download: T,
}

/// Runs conversions with a fixed set of limits and one export strategy.
#[derive(Debug, Clone)]
pub struct Converter<E = PlatformExport> {
    limits: DecodeLimits,
    format: OutputFormat,
    exporter: E,
}

impl<E: Export + Default> Default for Converter<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E: Export> Converter<E> {
    pub fn new(exporter: E) -> Self {
        Self {
            limits: DecodeLimits::default(),
            format: OutputFormat::default(),
            exporter,
        }
    }

    /// Replace the default decode limits.
    pub fn with_limits(mut self, limits: DecodeLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> &DecodeLimits {
        &self.limits
    }

    pub fn exporter(&self) -> &E {
        &self.exporter
    }

    /// Decode an upload using this converter's limits.
    pub fn decode_upload(&self, bytes: &[u8], file_name: &str) -> Result<PixelGrid, ConvertError> {
        Ok(decode::decode_upload(bytes, file_name, &self.limits)?)
    }

    /// Transform, encode and export one grid.
    ///
    /// Nothing reaches the exporter unless the transform and the encoder both
    /// succeed, so a failed conversion never leaves a partial download.
    pub fn run(
        &self,
        grid: &PixelGrid,
        mode: ConversionMode,
    ) -> Result<Conversion<E::Output>, ConvertError> {
        let preview = transform::convert(grid, mode)?;
        let encoded = encode::encode(&preview, self.format)?;
        let download = self.exporter.export(&encoded)?;

        tracing::info!(
            mode = mode.id(),
            width = preview.width,
            height = preview.height,
            bytes = encoded.len(),
            "conversion ready"
        );

        Ok(Conversion {
            mode,
            preview,
            encoded_len: encoded.len(),
            download,
        })
    }
}
