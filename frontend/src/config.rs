//! Application configuration.
//!
//! Centralized configuration for the OCR Translator frontend.
//! Values are compile-time constants; the backend URL can be overridden
//! at build time with the `OCR_TRANSLATOR_API` environment variable.

use std::time::Duration;

/// Backend API base URL.
///
/// Empty means same-origin: the Flask backend serves this bundle itself.
pub const BACKEND_URL: &str = match option_env!("OCR_TRANSLATOR_API") {
    Some(url) => url,
    None => "",
};

/// Maximum image size accepted for upload (in bytes).
///
/// 5 MiB, the same limit the backend enforces.
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Media type prefix an upload must carry.
pub const IMAGE_MEDIA_PREFIX: &str = "image/";

/// Characters kept from each text in a history row.
pub const HISTORY_EXCERPT_LEN: usize = 150;

/// Pause between the 100% checkpoint and revealing results.
pub const RESULT_REVEAL_DELAY_MS: u64 = 500;

/// How long a notification stays on screen.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 4000;

/// Downloaded files are named `<prefix><id>.txt`.
pub const DOWNLOAD_FILE_PREFIX: &str = "translation_";

/// Settings consumed by [`crate::UploadClient`].
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Prepended to every endpoint path.
    pub base_url: String,
    pub max_file_size: u64,
    pub excerpt_len: usize,
    pub reveal_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
            max_file_size: MAX_FILE_SIZE,
            excerpt_len: HISTORY_EXCERPT_LEN,
            reveal_delay: Duration::from_millis(RESULT_REVEAL_DELAY_MS),
        }
    }
}
