//! Browser console reporting and error conversion at the JS boundary.

use wasm_bindgen::JsValue;

/// Log a warning to the browser console.
///
/// Native builds (unit tests) have no console to write to, so this is a no-op
/// there.
pub(crate) fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));

    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Convert a Rust error into a JavaScript `Error`, reporting it first.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    let message = err.to_string();
    warn(&message);
    js_sys::Error::new(&message).into()
}
