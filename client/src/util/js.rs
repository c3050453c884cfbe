//! Readable text for values thrown by browser APIs.

use wasm_bindgen::{JsCast, JsValue};

/// Best-effort message for a thrown `JsValue`: string payloads as-is,
/// `Error`/`DOMException` objects by name and message, anything else via `Debug`.
pub fn error_text(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(err.name()), String::from(err.message()));
    }
    format!("{value:?}")
}
