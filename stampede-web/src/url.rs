//! Reading and writing the board payload in the address bar.
use stampede_core::constants::QUERY_KEY;
use wasm_bindgen::JsValue;
use web_sys::{Url, UrlSearchParams};

use crate::dom;
use crate::error::WebError;

/// Pull the board payload out of a `?a=b&d=...` search string.
///
/// `URLSearchParams` handles percent-decoding; an empty value counts as absent.
#[must_use]
pub fn payload_from_search(search: &str) -> Option<String> {
    UrlSearchParams::new_with_str(search)
        .ok()
        .and_then(|params| params.get(QUERY_KEY))
        .filter(|value| !value.trim().is_empty())
}

/// Board payload carried by the current page URL, if any.
#[must_use]
pub fn current_payload() -> Option<String> {
    dom::window()
        .and_then(|win| win.location().search().ok())
        .and_then(|search| payload_from_search(&search))
}

/// The current page address.
///
/// # Errors
/// Returns an error outside a browser or when the location is unreadable.
pub fn current_href() -> Result<String, WebError> {
    Ok(dom::require_window()?.location().href()?)
}

/// `href` with its `d` parameter set to `payload`; other parameters are kept.
///
/// # Errors
/// Returns an error when `href` is not an absolute URL.
pub fn with_payload(href: &str, payload: &str) -> Result<String, WebError> {
    let url = Url::new(href)?;
    url.search_params().set(QUERY_KEY, payload);
    Ok(url.href())
}

/// Swap the payload into the address bar without adding a history entry.
///
/// # Errors
/// Returns an error when the window, location or history are unavailable.
pub fn write_payload(payload: &str) -> Result<String, WebError> {
    let next = with_payload(&current_href()?, payload)?;
    dom::require_window()?
        .history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(&next))?;
    Ok(next)
}
