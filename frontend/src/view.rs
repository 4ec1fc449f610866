//! Rendering seam between [`crate::UploadClient`] and the page.
//!
//! The controller never touches the DOM: it calls explicit render
//! functions on a [`TranslatorView`]. In the browser those land in Leptos
//! signals ([`SignalView`]) that the components read.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::services::save_bytes;
use crate::{AppResult, HistoryPanel, Notification, Stage, NOTIFICATION_TIMEOUT_MS};

/// What the controller needs from the page.
#[allow(async_fn_in_trait)]
pub trait TranslatorView {
    /// Switch the main workflow area.
    fn render_stage(&self, stage: Stage);

    fn render_history(&self, panel: HistoryPanel);

    /// Show a transient notification.
    fn notify(&self, notification: Notification);

    /// Offer `bytes` to the user as a file download.
    fn save_file(&self, filename: &str, bytes: &[u8]) -> AppResult<()>;

    /// Wait before the next render step.
    async fn pause(&self, duration: Duration);
}

/// Reactive view state read by the components.
#[derive(Clone, Copy, Debug)]
pub struct SignalView {
    pub stage: RwSignal<Stage>,
    pub history: RwSignal<HistoryPanel>,
    pub notification: RwSignal<Option<Notification>>,
    /// Bumped on every notification so stale hide timers can tell
    notification_seq: RwSignal<u64>,
}

impl SignalView {
    /// Must be called inside a reactive owner (a component body).
    pub fn new() -> Self {
        Self {
            stage: create_rw_signal(Stage::Idle),
            history: create_rw_signal(HistoryPanel::Hidden),
            notification: create_rw_signal(None),
            notification_seq: create_rw_signal(0),
        }
    }
}

impl Default for SignalView {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslatorView for SignalView {
    fn render_stage(&self, stage: Stage) {
        self.stage.set(stage);
    }

    fn render_history(&self, panel: HistoryPanel) {
        self.history.set(panel);
    }

    fn notify(&self, notification: Notification) {
        let seq = self.notification_seq.get_untracked() + 1;
        self.notification_seq.set(seq);
        self.notification.set(Some(notification));

        let notification = self.notification;
        let notification_seq = self.notification_seq;
        Timeout::new(NOTIFICATION_TIMEOUT_MS, move || {
            if notification_seq.get_untracked() == seq {
                notification.set(None);
            }
        })
        .forget();
    }

    fn save_file(&self, filename: &str, bytes: &[u8]) -> AppResult<()> {
        save_bytes(filename, bytes)
    }

    async fn pause(&self, duration: Duration) {
        TimeoutFuture::new(duration.as_millis() as u32).await;
    }
}
