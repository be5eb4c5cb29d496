use stampede_core::SessionError;
use wasm_bindgen::JsValue;

use crate::dom::js_error_message;

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("could not convert board data: {0}")]
    Convert(String),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

impl From<serde_wasm_bindgen::Error> for WebError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::Convert(err.to_string())
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        Self::from_str(&err.to_string())
    }
}
