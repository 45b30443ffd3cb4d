//! Upload decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_upload`] - Decode an uploaded file with the default limits
//! - [`decode_upload_limited`] - Same, with a host-chosen byte limit
//! - [`is_supported_upload`] - Check a file name before reading the file
//! - [`upload_extensions`] - Extensions for the file input's `accept` list
//!
//! # Example
//!
//! ```typescript
//! import { decode_upload, is_supported_upload } from '@grayshift/wasm';
//!
//! if (is_supported_upload(file.name)) {
//!   const bytes = new Uint8Array(await file.arrayBuffer());
//!   const grid = decode_upload(bytes, file.name);
//!   console.log(`Decoded ${grid.width}x${grid.height} (${grid.layout})`);
//! }
//! ```

use crate::console::to_js_error;
use crate::types::JsPixelGrid;
use grayshift_core::decode::{self, DecodeLimits, UploadFormat};
use wasm_bindgen::prelude::*;

/// Decode an uploaded image.
///
/// # Arguments
///
/// * `bytes` - File contents as a `Uint8Array`
/// * `file_name` - Original file name; its extension must be jpg, jpeg, png or gif
///
/// # Returns
///
/// A BGR `JsPixelGrid`, or an error message if the upload is rejected.
#[wasm_bindgen]
pub fn decode_upload(bytes: &[u8], file_name: &str) -> Result<JsPixelGrid, JsValue> {
    decode_with(bytes, file_name, &DecodeLimits::default())
}

/// Decode an uploaded image, rejecting files larger than `max_bytes`.
#[wasm_bindgen]
pub fn decode_upload_limited(
    bytes: &[u8],
    file_name: &str,
    max_bytes: usize,
) -> Result<JsPixelGrid, JsValue> {
    let limits = DecodeLimits {
        max_bytes,
        ..DecodeLimits::default()
    };
    decode_with(bytes, file_name, &limits)
}

/// Check whether a file name has an accepted upload extension.
#[wasm_bindgen]
pub fn is_supported_upload(file_name: &str) -> bool {
    UploadFormat::from_file_name(file_name).is_ok()
}

/// Accepted upload extensions, e.g. for `<input accept=...>`.
#[wasm_bindgen]
pub fn upload_extensions() -> Vec<String> {
    UploadFormat::EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect()
}

fn decode_with(
    bytes: &[u8],
    file_name: &str,
    limits: &DecodeLimits,
) -> Result<JsPixelGrid, JsValue> {
    decode::decode_upload(bytes, file_name, limits)
        .map(JsPixelGrid::from_grid)
        .map_err(|e| to_js_error("Decode failed", e))
}

/// Tests for decode bindings.
///
/// Note: Functions returning `Result<T, JsValue>` only work on wasm32
/// targets. The underlying decoding is covered by `grayshift_core::decode`.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_supported_upload() {
        assert!(is_supported_upload("photo.jpg"));
        assert!(is_supported_upload("photo.JPEG"));
        assert!(is_supported_upload("icon.png"));
        assert!(is_supported_upload("anim.gif"));
        assert!(!is_supported_upload("scan.tiff"));
        assert!(!is_supported_upload("README"));
    }

    #[test]
    fn test_upload_extensions() {
        assert_eq!(upload_extensions(), vec![".jpg", ".jpeg", ".png", ".gif"]);
    }
}
