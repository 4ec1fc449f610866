//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Record Types** - Translations as the backend returns them
//! - **View Types** - What the controller asks the view to render
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::display::{format_created_at, truncate_text};
use crate::messages;

// =============================================================================
// Record Types
// =============================================================================

/// Opaque identifier of a translation record.
///
/// The backend uses an auto-increment column, but the client never does
/// arithmetic on it, so numbers and strings are both accepted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct TranslationId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

impl From<RawId> for TranslationId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Unsigned(n) => Self(n.to_string()),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        }
    }
}

impl TranslationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name the downloaded text file is saved under.
    pub fn download_filename(&self) -> String {
        format!("{}{}.txt", crate::DOWNLOAD_FILE_PREFIX, self.0)
    }
}

impl fmt::Display for TranslationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A successfully processed image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub id: TranslationId,
    /// Data URI (or URL) of the uploaded image
    pub image_preview: String,
    /// Text recognized on the image
    pub original_text: String,
    /// Russian translation of `original_text`
    pub translated_text: String,
}

/// One row of the `/history` listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: TranslationId,
    #[serde(default)]
    pub created_at: String,
    pub original_text: String,
    pub translated_text: String,
}

impl HistoryEntry {
    /// Build the render-ready row, cutting both texts to `excerpt_len`.
    pub fn to_item(&self, excerpt_len: usize) -> HistoryItemView {
        HistoryItemView {
            id: self.id.clone(),
            date: format_created_at(&self.created_at),
            original_excerpt: truncate_text(&self.original_text, excerpt_len),
            translated_excerpt: truncate_text(&self.translated_text, excerpt_len),
        }
    }
}

// =============================================================================
// View Types
// =============================================================================

/// History row as displayed.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryItemView {
    pub id: TranslationId,
    pub date: String,
    pub original_excerpt: String,
    pub translated_excerpt: String,
}

/// Cosmetic progress checkpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Progress {
    /// 0..=100
    pub percent: u8,
    pub label: &'static str,
}

impl Progress {
    pub const SENDING: Progress = Progress { percent: 20, label: messages::PROGRESS_UPLOADING };
    pub const RECEIVED: Progress = Progress { percent: 60, label: messages::PROGRESS_RECOGNIZING };
    pub const DECODED: Progress = Progress { percent: 90, label: messages::PROGRESS_TRANSLATING };
    pub const DONE: Progress = Progress { percent: 100, label: messages::PROGRESS_DONE };
}

/// Main workflow state.
///
/// `Idle → Uploading → Results` on success, `Idle → Uploading → Idle` on
/// failure, `Results → Idle` on reset.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Stage {
    /// Drop zone visible
    #[default]
    Idle,
    /// Progress bar visible
    Uploading(Progress),
    /// Results section visible
    Results(Translation),
}

/// History panel, toggled independently of [`Stage`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum HistoryPanel {
    #[default]
    Hidden,
    Shown(Vec<HistoryItemView>),
}

/// Notification severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }
}

/// Transient toast message.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Info, message: message.into() }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// User action an error happened in; selects the fallback message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Upload,
    Download,
    History,
}

impl Action {
    fn fallback_message(&self) -> &'static str {
        match self {
            Action::Upload => messages::UPLOAD_FAILED,
            Action::Download => messages::DOWNLOAD_FAILED,
            Action::History => messages::HISTORY_FAILED,
        }
    }
}

/// Frontend application errors.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// Selected file is not an image.
    #[error("Unsupported media type: {0:?}")]
    UnsupportedType(String),

    /// Selected file exceeds the upload limit.
    #[error("File too large: {size} bytes (limit {limit})")]
    FileTooLarge { size: u64, limit: u64 },

    /// Download requested with no current translation.
    #[error("No current translation to download")]
    MissingTranslationId,

    /// Request never got a response.
    #[error("Network error: {0}")]
    Network(String),

    /// Backend reported a failure, with or without a message.
    #[error("Server error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    /// Response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// A browser API call failed.
    #[error("Browser error: {0}")]
    Browser(String),
}

impl AppError {
    /// Notification text for this error when it ends `action`.
    pub fn user_message(&self, action: Action) -> String {
        match self {
            AppError::UnsupportedType(_) => messages::WRONG_TYPE.to_string(),
            AppError::FileTooLarge { .. } => messages::FILE_TOO_LARGE.to_string(),
            AppError::MissingTranslationId => messages::MISSING_TRANSLATION_ID.to_string(),
            AppError::Network(_) => messages::CONNECTION_ERROR.to_string(),
            AppError::Server { message: Some(message), .. } if !message.is_empty() => message.clone(),
            AppError::Server { .. } | AppError::Decode(_) | AppError::Browser(_) => {
                action.fallback_message().to_string()
            }
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
