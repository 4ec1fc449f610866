//! Translation download: `/download/{id}` replies and saving bytes as a file.

use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, HtmlAnchorElement, Url};

use crate::services::api::HttpReply;
use crate::{AppError, AppResult};

/// `{error}` body the backend sends with non-OK statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Message from an error body, if it has one.
pub fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body).ok().and_then(|b| b.error)
}

/// File contents on success, the backend's complaint otherwise.
pub fn decode_download_reply(reply: HttpReply) -> AppResult<Vec<u8>> {
    if reply.ok() {
        return Ok(reply.body);
    }

    Err(AppError::Server {
        status: reply.status,
        message: error_message(&reply.body),
    })
}

/// Hand `bytes` to the browser as a download named `filename`.
///
/// Goes through an object URL and a temporary `<a download>`, both
/// released before returning.
pub fn save_bytes(filename: &str, bytes: &[u8]) -> AppResult<()> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let blob = Blob::new_with_u8_array_sequence(&parts).map_err(js_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let document = gloo_utils::document();
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| AppError::Browser("<a> is not an HtmlAnchorElement".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = gloo_utils::body();
    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_error)?;

    Url::revoke_object_url(&url).map_err(js_error)
}

fn js_error(value: JsValue) -> AppError {
    AppError::Browser(format!("{:?}", value))
}
