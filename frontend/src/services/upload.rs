//! Image upload: client-side validation and `/upload` reply decoding.

use serde::Deserialize;

use crate::services::api::HttpReply;
use crate::{AppError, AppResult, Translation, TranslationId, IMAGE_MEDIA_PREFIX};

/// A file picked or dropped by the user.
pub trait SelectedFile {
    fn name(&self) -> String;
    /// Declared MIME type, empty when the browser could not tell
    fn media_type(&self) -> String;
    fn size(&self) -> u64;
}

impl SelectedFile for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn media_type(&self) -> String {
        web_sys::Blob::type_(self)
    }

    fn size(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }
}

/// Reject anything that is not an image or is over `max_size` bytes.
///
/// The type is checked first.
pub fn validate_image<F: SelectedFile>(file: &F, max_size: u64) -> AppResult<()> {
    let media_type = file.media_type();
    if !media_type.starts_with(IMAGE_MEDIA_PREFIX) {
        return Err(AppError::UnsupportedType(media_type));
    }

    let size = file.size();
    if size > max_size {
        return Err(AppError::FileTooLarge { size, limit: max_size });
    }

    Ok(())
}

/// Body of a `/upload` response.
///
/// Failures come back as `{success: false, error}` or, for rejected
/// requests, as a bare `{error}` with a 4xx/5xx status.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReply {
    #[serde(default)]
    pub success: bool,
    pub id: Option<TranslationId>,
    pub image_preview: Option<String>,
    pub original_text: Option<String>,
    pub translated_text: Option<String>,
    pub error: Option<String>,
}

impl UploadReply {
    /// Parse the body regardless of status.
    pub fn parse(reply: &HttpReply) -> AppResult<Self> {
        serde_json::from_slice(&reply.body).map_err(|e| AppError::Decode(e.to_string()))
    }

    /// The processed translation, or the failure the backend reported.
    pub fn into_translation(self, status: u16) -> AppResult<Translation> {
        if !self.success {
            return Err(AppError::Server { status, message: self.error });
        }

        match (self.id, self.image_preview, self.original_text, self.translated_text) {
            (Some(id), Some(image_preview), Some(original_text), Some(translated_text)) => Ok(Translation {
                id,
                image_preview,
                original_text,
                translated_text,
            }),
            _ => Err(AppError::Decode("successful upload reply is missing fields".to_string())),
        }
    }
}
