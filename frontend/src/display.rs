//! Text helpers for rendering backend records.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::fmt;

/// Same layout `toLocaleString('ru-RU')` produces.
const RU_DATETIME: &str = "%d.%m.%Y, %H:%M:%S";

/// Timestamp layouts MySQL rows take when serialized without an offset.
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Cut `text` to `max_len` characters, appending `...` when something was cut.
///
/// The cut is exact: no word-boundary awareness.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Render a backend `created_at` in the browser's local time.
///
/// Unparseable input is returned unchanged.
pub fn format_created_at(raw: &str) -> String {
    format_created_at_in(raw, &Local)
}

fn format_created_at_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let raw = raw.trim();

    // Flask serializes datetimes as RFC 2822 ("Tue, 15 Oct 2024 10:00:00 GMT")
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw).or_else(|_| DateTime::parse_from_rfc3339(raw)) {
        return dt.with_timezone(tz).format(RU_DATETIME).to_string();
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .map(|naive| naive.format(RU_DATETIME).to_string())
        .unwrap_or_else(|| raw.to_string())
}
