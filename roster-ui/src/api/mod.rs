//! API
//!
//! HTTP calls to the student records backend. Failures come back as
//! `Err(String)`; pages log them to the console and carry on.

pub mod client;

pub use client::*;

/// Log a swallowed failure to the browser console
pub fn log_error(context: &str, error: &str) {
    web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&format!("{}: {}", context, error)));
}
