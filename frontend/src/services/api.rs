//! HTTP transport to the translation backend.
//!
//! [`Transport`] is the seam between the controller and the network:
//! the browser build uses [`GlooTransport`], tests plug in an in-memory fake.

use gloo_net::http::{Request, Response};
use web_sys::FormData;

use crate::services::upload::SelectedFile;
use crate::{AppError, AppResult, TranslationId};

/// Image upload endpoint.
pub const UPLOAD_PATH: &str = "/upload";

/// Recent translations endpoint.
pub const HISTORY_PATH: &str = "/history";

/// Multipart field the backend reads the image from.
pub const UPLOAD_FIELD: &str = "file";

/// Per-record download endpoint.
pub fn download_path(id: &TranslationId) -> String {
    format!("/download/{}", id)
}

/// Status and raw body of a completed request.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    /// 2xx status.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests and hands back whatever the server answered.
///
/// Only transport failures are errors here; interpreting status codes and
/// bodies is left to the caller.
#[allow(async_fn_in_trait)]
pub trait Transport {
    type File: SelectedFile;

    /// POST `file` as multipart field `field`.
    async fn post_file(&self, path: &str, field: &str, file: &Self::File) -> AppResult<HttpReply>;

    async fn get(&self, path: &str) -> AppResult<HttpReply>;
}

/// Browser `fetch` transport built on `gloo-net`.
#[derive(Clone, Debug)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Transport for GlooTransport {
    type File = web_sys::File;

    async fn post_file(&self, path: &str, field: &str, file: &web_sys::File) -> AppResult<HttpReply> {
        let form_data = FormData::new()
            .map_err(|e| AppError::Browser(format!("Failed to create FormData: {:?}", e)))?;

        form_data
            .append_with_blob_and_filename(field, file, &file.name())
            .map_err(|e| AppError::Browser(format!("Failed to append file: {:?}", e)))?;

        let request = Request::post(&self.url(path))
            .body(form_data)
            .map_err(|e| AppError::Browser(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        read_reply(response).await
    }

    async fn get(&self, path: &str) -> AppResult<HttpReply> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        read_reply(response).await
    }
}

async fn read_reply(response: Response) -> AppResult<HttpReply> {
    let status = response.status();
    let body = response
        .binary()
        .await
        .map_err(|e| AppError::Network(format!("Failed to read response body: {}", e)))?;

    Ok(HttpReply { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        assert_eq!(GlooTransport::new("").url(UPLOAD_PATH), "/upload");
        assert_eq!(GlooTransport::new("http://localhost:5000/").url(HISTORY_PATH), "http://localhost:5000/history");
    }

    #[test]
    fn test_download_path_embeds_id() {
        assert_eq!(download_path(&TranslationId::new("12")), "/download/12");
    }

    #[test]
    fn test_reply_ok_range() {
        assert!(HttpReply { status: 200, body: vec![] }.ok());
        assert!(!HttpReply { status: 404, body: vec![] }.ok());
        assert!(!HttpReply { status: 500, body: vec![] }.ok());
    }
}
