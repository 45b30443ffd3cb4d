//! WASM-compatible wrapper types for pixel grids and downloads.
//!
//! This module provides JavaScript-friendly types that wrap the core Grayshift
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use grayshift_core::decode::{ChannelLayout, PixelGrid};
use grayshift_core::export::DataUri;
use wasm_bindgen::prelude::*;

use crate::console::to_js_error;

/// A pixel grid wrapper for JavaScript.
///
/// Color grids are in BGR order (see `layout`). For display, use
/// `to_image_data()`, which returns RGBA samples regardless of layout.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()` and `to_image_data()`
/// copy it into JavaScript memory. wasm-bindgen's finalizer releases the
/// WASM side; call `free()` to release a large grid early.
#[wasm_bindgen]
pub struct JsPixelGrid {
    inner: PixelGrid,
}

#[wasm_bindgen]
impl JsPixelGrid {
    /// Create a grid from raw samples.
    ///
    /// # Arguments
    /// * `width` - Width in pixels
    /// * `height` - Height in pixels
    /// * `channels` - 3 for BGR, 1 for gray
    /// * `pixels` - Row-major samples
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: u32,
        height: u32,
        channels: u8,
        pixels: Vec<u8>,
    ) -> Result<JsPixelGrid, JsValue> {
        let layout = ChannelLayout::from_channels(usize::from(channels))
            .ok_or_else(|| to_js_error("Invalid grid", format!("unsupported channel count {}", channels)))?;

        let expected = PixelGrid::expected_len(width, height, layout).ok_or_else(|| {
            to_js_error("Invalid grid", format!("{}x{} is too large", width, height))
        })?;
        if pixels.len() != expected {
            return Err(to_js_error(
                "Invalid grid",
                format!("expected {} bytes, got {}", expected, pixels.len()),
            ));
        }

        Ok(Self::from_grid(PixelGrid::new(width, height, layout, pixels)))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Samples per pixel: 3 (BGR) or 1 (gray).
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> u8 {
        self.inner.channels() as u8
    }

    /// Channel order: `"bgr"` or `"gray"`.
    #[wasm_bindgen(getter)]
    pub fn layout(&self) -> String {
        layout_name(self.inner.layout).to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels.len()
    }

    /// Raw samples in the grid's own layout, as Uint8Array.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }

    /// RGBA samples as Uint8ClampedArray, ready for `new ImageData(...)`.
    pub fn to_image_data(&self) -> js_sys::Uint8ClampedArray {
        js_sys::Uint8ClampedArray::from(self.inner.to_rgba().as_slice())
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelGrid {
    pub(crate) fn from_grid(grid: PixelGrid) -> Self {
        Self { inner: grid }
    }

    pub(crate) fn grid(&self) -> &PixelGrid {
        &self.inner
    }
}

pub(crate) fn layout_name(layout: ChannelLayout) -> &'static str {
    match layout {
        ChannelLayout::Bgr => "bgr",
        ChannelLayout::Gray => "gray",
    }
}

/// A download link for the converted image.
#[wasm_bindgen]
pub struct JsDownload {
    inner: DataUri,
}

#[wasm_bindgen]
impl JsDownload {
    /// `data:` URI to use as the link's `href`.
    #[wasm_bindgen(getter)]
    pub fn href(&self) -> String {
        self.inner.href.clone()
    }

    /// Value for the link's `download` attribute.
    #[wasm_bindgen(getter)]
    pub fn file_name(&self) -> String {
        self.inner.file_name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn mime(&self) -> String {
        self.inner.mime.clone()
    }
}

impl JsDownload {
    pub(crate) fn from_data_uri(uri: DataUri) -> Self {
        Self { inner: uri }
    }
}
