//! Error reporting to the browser console.

use wasm_bindgen::prelude::*;

/// Log `err` to the console and turn it into a `JsValue` for the caller.
pub(crate) fn to_js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    let message = format!("{}: {}", context, err);
    log_error(&message);
    JsValue::from_str(&message)
}

#[cfg(target_arch = "wasm32")]
fn log_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

// web-sys imports are only callable from wasm32
#[cfg(not(target_arch = "wasm32"))]
fn log_error(_message: &str) {}
