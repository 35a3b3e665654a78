//! Browser `fetch` as a data source for the corpus loader.

use f1_season::loader::Source;
use f1_season::SourceError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

/// Fetches relative URLs from the page origin, bypassing the HTTP cache.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSource;

impl Source for BrowserSource {
    async fn fetch(&self, location: &str) -> Result<String, SourceError> {
        let transport = |message: String| SourceError::Transport {
            location: location.to_string(),
            message,
        };

        let window = web_sys::window().ok_or_else(|| transport("no window".to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_cache(RequestCache::NoStore);
        let request = Request::new_with_str_and_init(location, &opts)
            .map_err(|e| transport(js_error(&e)))?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| transport(js_error(&e)))?
            .dyn_into()
            .map_err(|e| transport(js_error(&e)))?;

        if !response.ok() {
            return Err(SourceError::Status {
                location: location.to_string(),
                status: response.status(),
            });
        }

        let text = response.text().map_err(|e| transport(js_error(&e)))?;
        JsFuture::from(text)
            .await
            .map_err(|e| transport(js_error(&e)))?
            .as_string()
            .ok_or_else(|| transport("response body is not text".to_string()))
    }
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
