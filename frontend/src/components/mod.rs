//! UI Components for the OCR Translator.
//!
//! # Layout Components
//! - [`Header`] - Title bar with the history button
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Image upload with drag & drop
//! - [`ProgressSection`] - Upload/recognition progress bar
//! - [`ResultsSection`] - Recognized and translated text
//! - [`HistorySection`] - Past translations
//! - [`NotificationToast`] - Transient notifications

use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

mod header;
mod hero;
mod upload;
mod progress;
mod results;
mod history;
mod notification;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use progress::*;
pub use results::*;
pub use history::*;
pub use notification::*;
pub use footer::*;

/// Smoothly bring a freshly rendered section on screen.
pub(crate) fn scroll_into_view(element: Element) {
    leptos::request_animation_frame(move || {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    });
}
