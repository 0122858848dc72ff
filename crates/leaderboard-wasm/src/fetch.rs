//! The one network request the page makes

use leaderboard_core::LoadError;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Status and body of a finished request
#[derive(Debug, Clone)]
pub struct FetchedText {
    pub status: u16,
    pub body: String,
}

/// Fetch a URL once and read its body as text
pub async fn fetch_text(url: &str) -> Result<FetchedText, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Network("No window".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| LoadError::Network(describe(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| LoadError::Network("fetch did not return a Response".to_string()))?;

    let status = response.status();
    let text = response.text().map_err(|e| LoadError::Network(describe(&e)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| LoadError::Network(describe(&e)))?
        .as_string()
        .unwrap_or_default();

    Ok(FetchedText { status, body })
}

/// Readable message for a rejected promise
fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
