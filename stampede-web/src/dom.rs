use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::error::WebError;

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Like [`window`], but as an error for `?` chains.
///
/// # Errors
/// Returns [`WebError::NoWindow`] outside a browser context.
pub fn require_window() -> Result<Window, WebError> {
    window().ok_or(WebError::NoWindow)
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Wall-clock milliseconds, as fed to the persistence debouncer.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Seed material for the shuffle RNG.
#[must_use]
pub fn entropy() -> u64 {
    js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits()
}
