//! Browser-side HTTP helpers.
//!
//! In the WASM client these go through `window.fetch`. Outside the browser
//! (SSR, tests) there is nothing to call, so they fail with
//! [`ApiError::Unavailable`] and pages fall back to their empty states.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("HTTP requests are only available in the browser (requested {0})")]
    Unavailable(String),

    #[error("request failed: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("could not encode request body: {0}")]
    Encode(String),
}

#[cfg(target_arch = "wasm32")]
fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

#[cfg(target_arch = "wasm32")]
async fn send(request: &web_sys::Request) -> Result<web_sys::Response, ApiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

/// GET `url` and decode the JSON body.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    use wasm_bindgen_futures::JsFuture;

    let request = web_sys::Request::new_with_str(url).map_err(js_error)?;
    let response = send(&request).await?;
    let body = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST `body` as JSON to `url`, ignoring the response body.
#[cfg(target_arch = "wasm32")]
pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_body(&wasm_bindgen::JsValue::from_str(&json));

    let request = web_sys::Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    send(&request).await.map(drop)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    Err(ApiError::Unavailable(url.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
    Err(ApiError::Unavailable(url.to_string()))
}
