//! Image encoding WASM bindings.
//!
//! # Functions
//!
//! - [`encode_jpeg`] - Encode a grid to JPEG bytes at the fixed export quality

use crate::console::to_js_error;
use crate::types::JsPixelGrid;
use grayshift_core::encode::{self, OutputFormat};
use wasm_bindgen::prelude::*;

/// Encode a grid to JPEG bytes.
///
/// Gray grids produce a grayscale JPEG; BGR grids are written as ordinary
/// RGB JPEGs.
///
/// # Example
///
/// ```typescript
/// const jpeg = encode_jpeg(gray);
/// const blob = new Blob([jpeg], { type: 'image/jpeg' });
/// ```
#[wasm_bindgen]
pub fn encode_jpeg(grid: &JsPixelGrid) -> Result<Vec<u8>, JsValue> {
    encode::encode(grid.grid(), OutputFormat::Jpeg)
        .map(|encoded| encoded.into_bytes())
        .map_err(|e| to_js_error("Encoding failed", e))
}


/// WASM-specific tests that require JsValue.
///
/// Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use grayshift_core::decode::PixelGrid;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_jpeg_basic() {
        let grid = JsPixelGrid::from_grid(PixelGrid::gray(50, 50, vec![128u8; 2500]));
        let jpeg = encode_jpeg(&grid).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[wasm_bindgen_test]
    fn test_encode_jpeg_empty() {
        let grid = JsPixelGrid::from_grid(PixelGrid::gray(0, 0, vec![]));
        assert!(encode_jpeg(&grid).is_err());
    }
}
