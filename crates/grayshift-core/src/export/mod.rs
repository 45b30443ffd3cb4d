//! Making an encoded image available for download.
//!
//! There is one [`Export`] interface and one implementation per deployment
//! target:
//!
//! - **wasm32**: [`InlineExport`] embeds the bytes in a `data:` URI that the
//!   page offers as a link named `converted_image.jpg`.
//! - **native**: [`StagedExport`] writes the bytes to a uniquely named temp
//!   file and hands back a [`StagedDownload`] guard. The file is removed when
//!   the guard is finished or dropped, whichever comes first.
//!
//! [`PlatformExport`] names the implementation for the current target.

mod inline;
#[cfg(not(target_arch = "wasm32"))]
mod staged;

pub use inline::{DataUri, InlineExport};
#[cfg(not(target_arch = "wasm32"))]
pub use staged::{StagedDownload, StagedExport};

use std::io;

use thiserror::Error;

use crate::encode::EncodedImage;

/// Hands an encoded image to the download surface.
pub trait Export {
    /// What the host receives: a link, a file handle, etc.
    type Output;

    fn export(&self, image: &EncodedImage) -> Result<Self::Output, StorageError>;
}

/// The export implementation used on this target.
#[cfg(target_arch = "wasm32")]
pub type PlatformExport = InlineExport;

/// The export implementation used on this target.
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformExport = StagedExport;

/// Failures while staging or releasing a download.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The temporary file could not be created.
    #[error("Failed to create temporary file: {0}")]
    Create(#[source] io::Error),

    /// Writing the encoded bytes failed.
    #[error("Failed to write download: {0}")]
    Write(#[source] io::Error),

    /// Removing the staged file failed.
    #[error("Failed to remove staged download: {0}")]
    Cleanup(#[source] io::Error),

    /// A data URI could not be parsed back into an image.
    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),
}
