//! Dataset retrieval
//!
//! One fetch of the static dataset at startup. Failures are returned to the
//! caller as-is; there is no retry.

use periodic_core::{LoadError, parse_elements};
use periodic_types::{ElementRecord, ViewerConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Fetch and parse the element dataset.
pub async fn load_elements(config: &ViewerConfig) -> Result<Vec<ElementRecord>, LoadError> {
    let path = config.dataset_path.as_str();
    let body = fetch_text(path).await?;
    parse_elements(&body)
}

/// GET a resource relative to the page and return its body as text.
async fn fetch_text(path: &str) -> Result<String, LoadError> {
    let fetch_err = |message: String| LoadError::Fetch {
        path: path.to_string(),
        message,
    };

    let window = web_sys::window().ok_or_else(|| fetch_err("no window".into()))?;

    let response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| fetch_err(js_error_message(&e)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| fetch_err("fetch did not return a Response".into()))?;

    if !response.ok() {
        return Err(LoadError::Status {
            path: path.to_string(),
            status: response.status(),
        });
    }

    let text = response.text().map_err(|e| fetch_err(js_error_message(&e)))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|e| fetch_err(js_error_message(&e)))?;

    text.as_string()
        .ok_or_else(|| fetch_err("response body is not text".into()))
}

/// Extract a readable message from a rejected promise
fn js_error_message(value: &wasm_bindgen::JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", value))
}
