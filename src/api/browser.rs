//! Browser Transport
//!
//! `window.fetch` bound through web-sys.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::Transport;
use crate::error::{FetchError, FetchResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn get(&self, url: &str) -> FetchResult<String> {
        let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;

        let response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| FetchError::Network(js_error_message(&e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| FetchError::Network("fetch did not resolve to a Response".to_string()))?;

        if response.status() == 404 {
            return Err(FetchError::NotFound(url.to_string()));
        }
        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        let text = JsFuture::from(response.text().map_err(|e| FetchError::Network(js_error_message(&e)))?)
            .await
            .map_err(|e| FetchError::Network(js_error_message(&e)))?;
        text.as_string().ok_or_else(|| FetchError::Decode {
            url: url.to_string(),
            message: "body is not text".to_string(),
        })
    }
}

fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{:?}", value),
    }
}
