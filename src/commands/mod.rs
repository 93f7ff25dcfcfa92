//! Server Route Wrappers
//!
//! Frontend bindings to the HTTP routes the page's server exposes.

mod chat;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

pub use chat::*;

/// POST a JSON body and return the decoded JSON response.
///
/// The status code is not inspected; a non-JSON body is an error.
async fn post_json(url: &str, body: &str) -> Result<JsValue, String> {
    let window = web_sys::window().ok_or("No window available")?;

    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(body));

    let headers = web_sys::Headers::new().map_err(|_| "Failed to create headers".to_string())?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|_| "Failed to set headers".to_string())?;
    opts.set_headers(headers.as_ref());

    let resp = JsFuture::from(window.fetch_with_str_and_init(url, &opts))
        .await
        .map_err(|e| format!("Request failed: {:?}", e))?;
    let resp: web_sys::Response = resp.dyn_into().map_err(|_| "Response invalid".to_string())?;

    JsFuture::from(resp.json().map_err(|_| "Invalid response".to_string())?)
        .await
        .map_err(|_| format!("Invalid response ({})", resp.status()))
}
