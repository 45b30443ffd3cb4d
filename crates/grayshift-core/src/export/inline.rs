//! Inline transfer as a base64 `data:` URI.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use super::{Export, StorageError};
use crate::encode::{EncodedImage, OutputFormat};

/// A self-describing download link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataUri {
    /// `data:<mime>;base64,<payload>`
    pub href: String,
    /// Suggested file name for the download attribute.
    pub file_name: String,
    /// MIME type of the payload.
    pub mime: String,
}

impl DataUri {
    pub fn from_encoded(image: &EncodedImage) -> Self {
        let mime = image.format().mime_type();
        Self {
            href: format!("data:{};base64,{}", mime, STANDARD.encode(image.bytes())),
            file_name: image.file_name(),
            mime: mime.to_string(),
        }
    }

    /// Decode a `data:` URI back into the image it carries.
    pub fn parse(href: &str) -> Result<EncodedImage, StorageError> {
        let rest = href
            .strip_prefix("data:")
            .ok_or_else(|| StorageError::InvalidDataUri("missing data: scheme".to_string()))?;
        let (mime, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| StorageError::InvalidDataUri("missing base64 marker".to_string()))?;

        let format = OutputFormat::from_mime(mime)
            .map_err(|e| StorageError::InvalidDataUri(e.to_string()))?;
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| StorageError::InvalidDataUri(e.to_string()))?;

        Ok(EncodedImage::new(bytes, format))
    }
}

/// Export by embedding the bytes in a [`DataUri`]. Never touches storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineExport;

impl Export for InlineExport {
    type Output = DataUri;

    fn export(&self, image: &EncodedImage) -> Result<DataUri, StorageError> {
        let uri = DataUri::from_encoded(image);
        tracing::trace!(file_name = %uri.file_name, href_len = uri.href.len(), "inline export");
        Ok(uri)
    }
}
