//! `/history` reply decoding.

use serde::Deserialize;

use crate::services::api::HttpReply;
use crate::{AppError, AppResult, HistoryEntry};

#[derive(Debug, Deserialize)]
struct HistoryReply {
    history: Option<Vec<HistoryEntry>>,
    error: Option<String>,
}

/// Entries newest first, as the backend orders them.
pub fn decode_history_reply(reply: &HttpReply) -> AppResult<Vec<HistoryEntry>> {
    let parsed: HistoryReply =
        serde_json::from_slice(&reply.body).map_err(|e| AppError::Decode(e.to_string()))?;

    parsed.history.ok_or(AppError::Server {
        status: reply.status,
        message: parsed.error,
    })
}
