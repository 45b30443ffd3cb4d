//! Grayshift WASM - WebAssembly bindings for Grayshift
//!
//! This crate exposes grayshift-core to the browser page that hosts the
//! upload control, mode buttons, preview canvas and download link.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrappers for pixel grids and download links
//! - `decode` - Upload decoding bindings
//! - `convert` - Mode selection and conversion bindings
//! - `encode` - JPEG encoding bindings
//! - `export` - Data-URI downloads and the one-call conversion flow
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_upload, convert_for_download } from '@grayshift/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const grid = decode_upload(bytes, file.name);
//! const result = convert_for_download(grid, "grayscale");
//! link.href = result.download.href;
//! link.download = result.download.file_name;
//! ```

use wasm_bindgen::prelude::*;

mod console;
mod convert;
mod decode;
mod encode;
mod export;
mod types;

// Re-export public types
pub use convert::{convert, convert_by_index, modes};
pub use decode::{decode_upload, decode_upload_limited, is_supported_upload, upload_extensions};
pub use encode::encode_jpeg;
pub use export::{convert_for_download, export_download, JsConversion};
pub use types::{JsDownload, JsPixelGrid};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
