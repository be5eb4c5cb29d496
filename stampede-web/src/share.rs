use serde::Serialize;
use stampede_core::constants::SHARE_TEXT;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Navigator, ShareData};

use crate::dom;
use crate::error::WebError;

/// How the link reached the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShareOutcome {
    /// Copied and handed to the platform share sheet.
    Shared,
    /// Copied to the clipboard only.
    Copied,
}

fn supports_native_share(navigator: &Navigator) -> bool {
    js_sys::Reflect::has(navigator, &JsValue::from_str("share")).unwrap_or(false)
}

/// Copy `url` to the clipboard, then offer the native share sheet when present.
///
/// A dismissed share sheet is not an error: the link is already copied.
///
/// # Errors
/// Returns an error when there is no window or the clipboard write is refused.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn share_link(title: &str, url: &str) -> Result<ShareOutcome, WebError> {
    let navigator = dom::require_window()?.navigator();
    JsFuture::from(navigator.clipboard().write_text(url)).await?;

    if !supports_native_share(&navigator) {
        return Ok(ShareOutcome::Copied);
    }
    let data = ShareData::new();
    data.set_title(title);
    data.set_text(SHARE_TEXT);
    data.set_url(url);
    match JsFuture::from(navigator.share_with_data(&data)).await {
        Ok(_) => Ok(ShareOutcome::Shared),
        Err(err) => {
            log::warn!("Share sheet closed: {}", dom::js_error_message(&err));
            Ok(ShareOutcome::Copied)
        }
    }
}
