//! Output format tag and the immutable encoded image.

use serde::{Deserialize, Serialize};

use super::EncodeError;
use crate::config::DOWNLOAD_STEM;

/// Output container. Only JPEG is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Jpeg,
}

impl OutputFormat {
    /// Parse a format tag such as `"jpg"` or `".JPEG"`.
    pub fn from_extension(tag: &str) -> Result<Self, EncodeError> {
        match tag.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            _ => Err(EncodeError::UnsupportedFormat(tag.to_string())),
        }
    }

    /// Parse a MIME type such as `"image/jpeg"`.
    pub fn from_mime(mime: &str) -> Result<Self, EncodeError> {
        match mime.to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Ok(OutputFormat::Jpeg),
            _ => Err(EncodeError::UnsupportedFormat(mime.to_string())),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
        }
    }

    /// Suggested download file name, e.g. `converted_image.jpg`.
    pub fn download_file_name(self) -> String {
        format!("{}.{}", DOWNLOAD_STEM, self.extension())
    }
}

/// Compressed image bytes tagged with their format.
///
/// Immutable once built; only the encoder and data-URI parser create one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    bytes: Vec<u8>,
    format: OutputFormat,
}

impl EncodedImage {
    pub(crate) fn new(bytes: Vec<u8>, format: OutputFormat) -> Self {
        Self { bytes, format }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn file_name(&self) -> String {
        self.format.download_file_name()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(OutputFormat::from_extension("jpg").unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_extension(".JPEG").unwrap(), OutputFormat::Jpeg);
        assert!(matches!(
            OutputFormat::from_extension("png"),
            Err(EncodeError::UnsupportedFormat(tag)) if tag == "png"
        ));
    }

    #[test]
    fn test_from_mime() {
        assert_eq!(OutputFormat::from_mime("image/jpeg").unwrap(), OutputFormat::Jpeg);
        assert!(OutputFormat::from_mime("image/webp").is_err());
    }

    #[test]
    fn test_download_file_name() {
        assert_eq!(OutputFormat::Jpeg.download_file_name(), "converted_image.jpg");
        assert_eq!(OutputFormat::Jpeg.mime_type(), "image/jpeg");
    }

    #[test]
    fn test_encoded_image_accessors() {
        let img = EncodedImage::new(vec![0xFF, 0xD8, 0xFF, 0xD9], OutputFormat::Jpeg);
        assert_eq!(img.len(), 4);
        assert!(!img.is_empty());
        assert_eq!(img.file_name(), "converted_image.jpg");
        assert_eq!(img.into_bytes(), vec![0xFF, 0xD8, 0xFF, 0xD9]);
    }
}
