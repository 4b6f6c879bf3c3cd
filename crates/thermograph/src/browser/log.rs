//! Console logging.

use wasm_bindgen::JsValue;

/// `console.log`
pub fn info(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// `console.warn`
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

/// `console.error`
pub fn error(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}
