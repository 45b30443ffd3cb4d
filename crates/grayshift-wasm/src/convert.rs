//! Conversion WASM bindings.
//!
//! One binding per way the page can name a mode: by string id (matching the
//! serde form, e.g. `"gray_half"`) or by button index (0-3).

use crate::console::to_js_error;
use crate::types::JsPixelGrid;
use grayshift_core::transform::{self, ConversionMode};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Descriptor for rendering one mode button.
#[derive(Debug, Serialize)]
struct ModeInfo {
    id: ConversionMode,
    label: &'static str,
}

/// Convert a grid with a mode given as a string id.
///
/// Accepted ids: `"grayscale"`, `"black_white"`, `"gray_half"`, `"gray_quarter"`.
///
/// # Example
///
/// ```typescript
/// const gray = convert(grid, "gray_quarter");
/// ctx.putImageData(new ImageData(gray.to_image_data(), gray.width, gray.height), 0, 0);
/// ```
#[wasm_bindgen]
pub fn convert(grid: &JsPixelGrid, mode: JsValue) -> Result<JsPixelGrid, JsValue> {
    let mode = parse_mode(mode)?;
    convert_with(grid, mode)
}

/// Convert a grid with a mode given as a button index (0-3).
#[wasm_bindgen]
pub fn convert_by_index(grid: &JsPixelGrid, index: u8) -> Result<JsPixelGrid, JsValue> {
    let mode = ConversionMode::from_index(index)
        .ok_or_else(|| to_js_error("Unknown mode", format!("index {}", index)))?;
    convert_with(grid, mode)
}

/// All modes as `{ id, label }` objects, in button order.
#[wasm_bindgen]
pub fn modes() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&mode_infos()).map_err(|e| to_js_error("Failed to list modes", e))
}

pub(crate) fn parse_mode(mode: JsValue) -> Result<ConversionMode, JsValue> {
    serde_wasm_bindgen::from_value(mode).map_err(|e| to_js_error("Unknown mode", e))
}

fn convert_with(grid: &JsPixelGrid, mode: ConversionMode) -> Result<JsPixelGrid, JsValue> {
    transform::convert(grid.grid(), mode)
        .map(JsPixelGrid::from_grid)
        .map_err(|e| to_js_error("Conversion failed", e))
}

fn mode_infos() -> Vec<ModeInfo> {
    ConversionMode::ALL
        .iter()
        .map(|&mode| ModeInfo {
            id: mode,
            label: mode.label(),
        })
        .collect()
}
