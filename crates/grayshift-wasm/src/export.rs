//! Download WASM bindings.
//!
//! The browser build uses inline transfer: the encoded image travels back as
//! a `data:` URI with the suggested file name `converted_image.jpg`.

use crate::console::to_js_error;
use crate::convert::parse_mode;
use crate::types::{JsDownload, JsPixelGrid};
use grayshift_core::export::InlineExport;
use grayshift_core::pipeline::{Conversion, Converter};
use grayshift_core::transform::ConversionMode;
use grayshift_core::DataUri;
use grayshift_core::{encode, OutputFormat};
use wasm_bindgen::prelude::*;

/// Result of one button press: preview grid plus download link.
#[wasm_bindgen]
pub struct JsConversion {
    inner: Conversion<DataUri>,
}

#[wasm_bindgen]
impl JsConversion {
    /// Mode id that produced this result.
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.inner.mode.id().to_string()
    }

    /// Converted grid for the preview canvas.
    #[wasm_bindgen(getter)]
    pub fn preview(&self) -> JsPixelGrid {
        JsPixelGrid::from_grid(self.inner.preview.clone())
    }

    #[wasm_bindgen(getter)]
    pub fn download(&self) -> JsDownload {
        JsDownload::from_data_uri(self.inner.download.clone())
    }

    /// Size of the encoded JPEG in bytes.
    #[wasm_bindgen(getter)]
    pub fn encoded_len(&self) -> usize {
        self.inner.encoded_len
    }
}

/// Encode a grid and wrap it as a download link.
#[wasm_bindgen]
pub fn export_download(grid: &JsPixelGrid) -> Result<JsDownload, JsValue> {
    let encoded = encode(grid.grid(), OutputFormat::Jpeg)
        .map_err(|e| to_js_error("Encoding failed", e))?;
    Ok(JsDownload::from_data_uri(DataUri::from_encoded(&encoded)))
}

/// Convert, encode and export in one call.
///
/// # Example
///
/// ```typescript
/// button.onclick = () => {
///   const result = convert_for_download(grid, "black_white");
///   link.href = result.download.href;
///   link.download = result.download.file_name;
/// };
/// ```
#[wasm_bindgen]
pub fn convert_for_download(grid: &JsPixelGrid, mode: JsValue) -> Result<JsConversion, JsValue> {
    run(grid, parse_mode(mode)?)
}

fn run(grid: &JsPixelGrid, mode: ConversionMode) -> Result<JsConversion, JsValue> {
    Converter::new(InlineExport)
        .run(grid.grid(), mode)
        .map(|inner| JsConversion { inner })
        .map_err(|e| to_js_error("Conversion failed", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use grayshift_core::decode::PixelGrid;

    #[test]
    fn test_conversion_accessors() {
        let grid = PixelGrid::bgr(40, 40, vec![90u8; 40 * 40 * 3]);
        let inner = Converter::new(InlineExport)
            .run(&grid, ConversionMode::GrayHalf)
            .unwrap();
        let result = JsConversion { inner };

        assert_eq!(result.mode(), "gray_half");
        assert_eq!(result.preview().width(), 20);
        assert_eq!(result.preview().layout(), "gray");
        assert_eq!(result.download().file_name(), "converted_image.jpg");
        assert!(result.download().href().starts_with("data:image/jpeg;base64,"));
        assert!(result.encoded_len() > 0);
    }
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

    fn color_grid() -> JsPixelGrid {
        JsPixelGrid::from_grid(PixelGrid::bgr(100, 80, vec![60u8; 100 * 80 * 3]))
    }

    #[wasm_bindgen_test]
    fn test_export_download() {
        let download = export_download(&color_grid()).unwrap();
        assert_eq!(download.mime(), "image/jpeg");
        assert!(download.href().starts_with("data:image/jpeg;base64,"));
    }

    #[wasm_bindgen_test]
    fn test_convert_for_download() {
        let result = convert_for_download(&color_grid(), JsValue::from_str("gray_quarter")).unwrap();
        assert_eq!(result.preview().width(), 25);
        assert_eq!(result.preview().height(), 20);
    }

    #[wasm_bindgen_test]
    fn test_convert_for_download_too_small() {
        let tiny = JsPixelGrid::from_grid(PixelGrid::bgr(2, 2, vec![0u8; 12]));
        assert!(convert_for_download(&tiny, JsValue::from_str("gray_quarter")).is_err());
    }
}
