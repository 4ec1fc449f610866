//! The upload workflow controller.
//!
//! [`UploadClient`] runs the whole page flow: validate → upload → progress
//! → results, plus downloads, reset and history. It owns the only session
//! state, the id of the last successful translation, and talks to the
//! outside world through a [`Transport`] and a [`TranslatorView`].
//!
//! Every action catches its own failures and turns them into a
//! notification; nothing is retried.

use std::cell::RefCell;
use std::rc::Rc;

use crate::services::{
    decode_download_reply, decode_history_reply, download_path, validate_image, SelectedFile, Transport,
    UploadReply, HISTORY_PATH, UPLOAD_FIELD, UPLOAD_PATH,
};
use crate::view::TranslatorView;
use crate::{
    messages, Action, AppError, AppResult, ClientConfig, HistoryEntry, HistoryPanel, Notification, Progress, Stage,
    Translation, TranslationId,
};

/// Controller behind every button on the page.
///
/// Cloning is cheap and clones share the current translation id, so each
/// event handler can hold its own copy.
#[derive(Clone)]
pub struct UploadClient<T, V> {
    transport: T,
    view: V,
    config: ClientConfig,
    current_id: Rc<RefCell<Option<TranslationId>>>,
}

impl<T: Transport, V: TranslatorView> UploadClient<T, V> {
    pub fn new(transport: T, view: V, config: ClientConfig) -> Self {
        Self {
            transport,
            view,
            config,
            current_id: Rc::new(RefCell::new(None)),
        }
    }

    /// Id of the translation on screen, if any.
    pub fn current_translation_id(&self) -> Option<TranslationId> {
        self.current_id.borrow().clone()
    }

    /// Validate and upload `file`, then show its translation.
    ///
    /// Invalid files are rejected before any request is made.
    pub async fn submit_file(&self, file: &T::File) {
        if let Err(e) = validate_image(file, self.config.max_file_size) {
            log::warn!("Rejected {}: {}", file.name(), e);
            self.view.notify(Notification::error(e.user_message(Action::Upload)));
            return;
        }

        log::info!("📤 Uploading {} ({} bytes)", file.name(), file.size());

        match self.upload(file).await {
            Ok(translation) => {
                self.view.render_stage(Stage::Uploading(Progress::DONE));
                self.view.pause(self.config.reveal_delay).await;

                log::info!("✅ Translation {} ready", translation.id);
                *self.current_id.borrow_mut() = Some(translation.id.clone());
                self.view.render_stage(Stage::Results(translation));
                self.view.notify(Notification::success(messages::UPLOAD_SUCCESS));
            }
            Err(e) => {
                log::error!("Upload error: {}", e);
                self.view.render_stage(Stage::Idle);
                self.view.notify(Notification::error(e.user_message(Action::Upload)));
            }
        }
    }

    async fn upload(&self, file: &T::File) -> AppResult<Translation> {
        self.view.render_stage(Stage::Uploading(Progress::SENDING));
        let reply = self.transport.post_file(UPLOAD_PATH, UPLOAD_FIELD, file).await?;

        self.view.render_stage(Stage::Uploading(Progress::RECEIVED));
        let parsed = UploadReply::parse(&reply)?;

        self.view.render_stage(Stage::Uploading(Progress::DECODED));
        parsed.into_translation(reply.status)
    }

    /// Download translation `id`, or the current one when `id` is `None`.
    pub async fn download_translation(&self, id: Option<TranslationId>) {
        let Some(id) = id.or_else(|| self.current_translation_id()) else {
            let err = AppError::MissingTranslationId;
            log::warn!("{}", err);
            self.view.notify(Notification::error(err.user_message(Action::Download)));
            return;
        };

        match self.download(&id).await {
            Ok(()) => {
                log::info!("💾 Saved {}", id.download_filename());
                self.view.notify(Notification::success(messages::DOWNLOAD_SUCCESS));
            }
            Err(e) => {
                log::error!("Download error: {}", e);
                self.view.notify(Notification::error(e.user_message(Action::Download)));
            }
        }
    }

    async fn download(&self, id: &TranslationId) -> AppResult<()> {
        let reply = self.transport.get(&download_path(id)).await?;
        let bytes = decode_download_reply(reply)?;
        self.view.save_file(&id.download_filename(), &bytes)
    }

    /// Raw history listing.
    pub async fn fetch_history(&self) -> AppResult<Vec<HistoryEntry>> {
        let reply = self.transport.get(HISTORY_PATH).await?;
        decode_history_reply(&reply)
    }

    /// Fetch the history and open the panel.
    pub async fn show_history(&self) {
        match self.fetch_history().await {
            Ok(entries) => {
                log::info!("📜 {} history entries", entries.len());
                let items = entries
                    .iter()
                    .map(|entry| entry.to_item(self.config.excerpt_len))
                    .collect();
                self.view.render_history(HistoryPanel::Shown(items));
            }
            Err(e) => {
                log::error!("History error: {}", e);
                self.view.notify(Notification::error(e.user_message(Action::History)));
            }
        }
    }

    pub fn hide_history(&self) {
        self.view.render_history(HistoryPanel::Hidden);
    }

    /// Drop the current result and go back to the drop zone.
    pub fn reset(&self) {
        self.current_id.borrow_mut().take();
        self.view.render_stage(Stage::Idle);
        self.view.notify(Notification::info(messages::READY_FOR_NEW));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::HttpReply;
    use crate::{NotificationKind, MAX_FILE_SIZE};
    use futures::executor::block_on;
    use std::collections::VecDeque;
    use std::time::Duration;

    // =========================================================================
    // Test doubles
    // =========================================================================

    struct FakeFile {
        media_type: &'static str,
        size: u64,
    }

    impl FakeFile {
        fn png(size: u64) -> Self {
            Self { media_type: "image/png", size }
        }
    }

    impl SelectedFile for FakeFile {
        fn name(&self) -> String {
            "page.png".to_string()
        }

        fn media_type(&self) -> String {
            self.media_type.to_string()
        }

        fn size(&self) -> u64 {
            self.size
        }
    }

    /// Answers requests from a queue and records their paths.
    #[derive(Clone, Default)]
    struct FakeTransport {
        replies: Rc<RefCell<VecDeque<AppResult<HttpReply>>>>,
        requests: Rc<RefCell<Vec<String>>>,
    }

    impl FakeTransport {
        fn reply(&self, status: u16, body: &str) {
            self.replies
                .borrow_mut()
                .push_back(Ok(HttpReply { status, body: body.as_bytes().to_vec() }));
        }

        fn fail(&self, err: AppError) {
            self.replies.borrow_mut().push_back(Err(err));
        }

        fn requests(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }

        fn next(&self, request: String) -> AppResult<HttpReply> {
            self.requests.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(AppError::Network("no reply queued".into())))
        }
    }

    impl Transport for FakeTransport {
        type File = FakeFile;

        async fn post_file(&self, path: &str, field: &str, _file: &FakeFile) -> AppResult<HttpReply> {
            self.next(format!("POST {} [{}]", path, field))
        }

        async fn get(&self, path: &str) -> AppResult<HttpReply> {
            self.next(format!("GET {}", path))
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    enum ViewEvent {
        Stage(Stage),
        History(HistoryPanel),
        Notify(Notification),
        Saved(String, Vec<u8>),
        Pause(Duration),
    }

    #[derive(Clone, Default)]
    struct RecordingView {
        events: Rc<RefCell<Vec<ViewEvent>>>,
    }

    impl RecordingView {
        fn events(&self) -> Vec<ViewEvent> {
            self.events.borrow().clone()
        }

        fn last_stage(&self) -> Option<Stage> {
            self.events.borrow().iter().rev().find_map(|e| match e {
                ViewEvent::Stage(stage) => Some(stage.clone()),
                _ => None,
            })
        }

        fn notifications(&self) -> Vec<Notification> {
            self.events
                .borrow()
                .iter()
                .filter_map(|e| match e {
                    ViewEvent::Notify(n) => Some(n.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl TranslatorView for RecordingView {
        fn render_stage(&self, stage: Stage) {
            self.events.borrow_mut().push(ViewEvent::Stage(stage));
        }

        fn render_history(&self, panel: HistoryPanel) {
            self.events.borrow_mut().push(ViewEvent::History(panel));
        }

        fn notify(&self, notification: Notification) {
            self.events.borrow_mut().push(ViewEvent::Notify(notification));
        }

        fn save_file(&self, filename: &str, bytes: &[u8]) -> AppResult<()> {
            self.events
                .borrow_mut()
                .push(ViewEvent::Saved(filename.to_string(), bytes.to_vec()));
            Ok(())
        }

        async fn pause(&self, duration: Duration) {
            self.events.borrow_mut().push(ViewEvent::Pause(duration));
        }
    }

    fn setup() -> (UploadClient<FakeTransport, RecordingView>, FakeTransport, RecordingView) {
        let transport = FakeTransport::default();
        let view = RecordingView::default();
        let client = UploadClient::new(transport.clone(), view.clone(), ClientConfig::default());
        (client, transport, view)
    }

    const SUCCESS_REPLY: &str = r#"{
        "success": true,
        "id": 42,
        "image_preview": "data:image/png;base64,AAAA",
        "original_text": "Hello world",
        "translated_text": "Привет, мир"
    }"#;

    // =========================================================================
    // Upload
    // =========================================================================

    #[test]
    fn test_non_image_is_rejected_without_request() {
        let (client, transport, view) = setup();

        for media_type in ["application/pdf", "text/plain", ""] {
            block_on(client.submit_file(&FakeFile { media_type, size: 1024 }));
        }

        assert!(transport.requests().is_empty());
        let notifications = view.notifications();
        assert_eq!(notifications.len(), 3);
        assert!(notifications
            .iter()
            .all(|n| n.kind == NotificationKind::Error && n.message == messages::WRONG_TYPE));
        assert_eq!(view.last_stage(), None);
    }

    #[test]
    fn test_oversize_image_is_rejected_without_request() {
        let (client, transport, view) = setup();

        for media_type in ["image/png", "image/jpeg", "image/webp"] {
            block_on(client.submit_file(&FakeFile { media_type, size: MAX_FILE_SIZE + 1 }));
        }

        assert!(transport.requests().is_empty());
        assert!(view.notifications().iter().all(|n| n.message == messages::FILE_TOO_LARGE));
    }

    #[test]
    fn test_image_at_limit_is_uploaded() {
        let (client, transport, _view) = setup();
        transport.reply(200, SUCCESS_REPLY);

        block_on(client.submit_file(&FakeFile::png(MAX_FILE_SIZE)));

        assert_eq!(transport.requests(), vec!["POST /upload [file]".to_string()]);
    }

    #[test]
    fn test_successful_upload_walks_progress_then_shows_results() {
        let (client, transport, view) = setup();
        transport.reply(200, SUCCESS_REPLY);

        block_on(client.submit_file(&FakeFile::png(2048)));

        let expected = Translation {
            id: TranslationId::new("42"),
            image_preview: "data:image/png;base64,AAAA".into(),
            original_text: "Hello world".into(),
            translated_text: "Привет, мир".into(),
        };
        assert_eq!(
            view.events(),
            vec![
                ViewEvent::Stage(Stage::Uploading(Progress::SENDING)),
                ViewEvent::Stage(Stage::Uploading(Progress::RECEIVED)),
                ViewEvent::Stage(Stage::Uploading(Progress::DECODED)),
                ViewEvent::Stage(Stage::Uploading(Progress::DONE)),
                ViewEvent::Pause(Duration::from_millis(500)),
                ViewEvent::Stage(Stage::Results(expected)),
                ViewEvent::Notify(Notification::success(messages::UPLOAD_SUCCESS)),
            ]
        );
        assert_eq!(client.current_translation_id(), Some(TranslationId::new("42")));
    }

    #[test]
    fn test_backend_failure_returns_to_idle_with_its_message() {
        let (client, transport, view) = setup();
        transport.reply(200, r#"{"success": false, "error": "X"}"#);

        block_on(client.submit_file(&FakeFile::png(2048)));

        assert_eq!(view.last_stage(), Some(Stage::Idle));
        assert_eq!(view.notifications(), vec![Notification::error("X")]);
        assert_eq!(client.current_translation_id(), None);
    }

    #[test]
    fn test_oversize_rejected_by_backend_surfaces_message() {
        let (client, transport, view) = setup();
        transport.reply(413, r#"{"error": "Файл слишком большой. Максимальный размер: 5 МБ"}"#);

        block_on(client.submit_file(&FakeFile::png(2048)));

        assert_eq!(view.last_stage(), Some(Stage::Idle));
        assert_eq!(
            view.notifications()[0].message,
            "Файл слишком большой. Максимальный размер: 5 МБ"
        );
    }

    #[test]
    fn test_non_json_upload_reply_uses_generic_message() {
        let (client, transport, view) = setup();
        transport.reply(502, "<html>Bad Gateway</html>");

        block_on(client.submit_file(&FakeFile::png(2048)));

        // Never reached the 90% checkpoint
        assert!(!view.events().contains(&ViewEvent::Stage(Stage::Uploading(Progress::DECODED))));
        assert_eq!(view.last_stage(), Some(Stage::Idle));
        assert_eq!(view.notifications(), vec![Notification::error(messages::UPLOAD_FAILED)]);
    }

    #[test]
    fn test_connection_failure_during_upload() {
        let (client, transport, view) = setup();
        transport.fail(AppError::Network("connection refused".into()));

        block_on(client.submit_file(&FakeFile::png(2048)));

        assert_eq!(view.last_stage(), Some(Stage::Idle));
        assert_eq!(view.notifications(), vec![Notification::error(messages::CONNECTION_ERROR)]);
    }

    // =========================================================================
    // Download & reset
    // =========================================================================

    #[test]
    fn test_reset_clears_current_id_and_blocks_download() {
        let (client, transport, view) = setup();
        transport.reply(200, SUCCESS_REPLY);
        block_on(client.submit_file(&FakeFile::png(2048)));
        assert!(client.current_translation_id().is_some());

        client.reset();
        assert_eq!(client.current_translation_id(), None);
        assert_eq!(view.last_stage(), Some(Stage::Idle));

        block_on(client.download_translation(None));

        assert_eq!(transport.requests().len(), 1, "only the upload was sent");
        assert_eq!(
            view.notifications().last(),
            Some(&Notification::error(messages::MISSING_TRANSLATION_ID))
        );
    }

    #[test]
    fn test_reset_notifies_ready() {
        let (client, _transport, view) = setup();
        client.reset();
        assert_eq!(view.notifications(), vec![Notification::info(messages::READY_FOR_NEW)]);
    }

    #[test]
    fn test_download_current_translation() {
        let (client, transport, view) = setup();
        transport.reply(200, SUCCESS_REPLY);
        block_on(client.submit_file(&FakeFile::png(2048)));

        transport.reply(200, "Переведенный текст:\nПривет, мир");
        block_on(client.download_translation(None));

        assert_eq!(transport.requests()[1], "GET /download/42");
        assert!(view.events().contains(&ViewEvent::Saved(
            "translation_42.txt".into(),
            "Переведенный текст:\nПривет, мир".as_bytes().to_vec(),
        )));
        assert_eq!(view.notifications().last(), Some(&Notification::success(messages::DOWNLOAD_SUCCESS)));
    }

    #[test]
    fn test_download_explicit_id_without_current() {
        let (client, transport, view) = setup();
        transport.reply(200, "text");

        block_on(client.download_translation(Some(TranslationId::new("7"))));

        assert_eq!(transport.requests(), vec!["GET /download/7".to_string()]);
        assert!(view.events().contains(&ViewEvent::Saved("translation_7.txt".into(), b"text".to_vec())));
    }

    #[test]
    fn test_download_not_found_surfaces_error() {
        let (client, transport, view) = setup();
        transport.reply(404, r#"{"error": "Перевод не найден"}"#);

        block_on(client.download_translation(Some(TranslationId::new("99"))));

        assert_eq!(view.notifications(), vec![Notification::error("Перевод не найден")]);
        assert!(!view.events().iter().any(|e| matches!(e, ViewEvent::Saved(..))));
    }

    #[test]
    fn test_download_server_error_without_body_uses_fallback() {
        let (client, transport, view) = setup();
        transport.reply(500, "Internal Server Error");

        block_on(client.download_translation(Some(TranslationId::new("1"))));

        assert_eq!(view.notifications(), vec![Notification::error(messages::DOWNLOAD_FAILED)]);
    }

    // =========================================================================
    // History
    // =========================================================================

    #[test]
    fn test_show_history_renders_truncated_items() {
        let (client, transport, view) = setup();
        let long = "a".repeat(151);
        transport.reply(
            200,
            &format!(
                r#"{{"history": [{{"id": 3, "created_at": "garbled", "original_text": "{}", "translated_text": "коротко"}}]}}"#,
                long
            ),
        );

        block_on(client.show_history());

        assert_eq!(transport.requests(), vec!["GET /history".to_string()]);
        let expected = HistoryPanel::Shown(vec![crate::HistoryItemView {
            id: TranslationId::new("3"),
            date: "garbled".into(),
            original_excerpt: format!("{}...", "a".repeat(150)),
            translated_excerpt: "коротко".into(),
        }]);
        assert_eq!(view.events(), vec![ViewEvent::History(expected)]);
    }

    #[test]
    fn test_empty_history_still_opens_panel() {
        let (client, transport, view) = setup();
        transport.reply(200, r#"{"history": []}"#);

        block_on(client.show_history());

        assert_eq!(view.events(), vec![ViewEvent::History(HistoryPanel::Shown(vec![]))]);
    }

    #[test]
    fn test_history_error_keeps_panel_closed() {
        let (client, transport, view) = setup();
        transport.reply(500, r#"{"error": "Ошибка получения истории"}"#);

        block_on(client.show_history());

        assert_eq!(view.events(), vec![ViewEvent::Notify(Notification::error("Ошибка получения истории"))]);
    }

    #[test]
    fn test_history_without_error_text_uses_fallback() {
        let (client, transport, view) = setup();
        transport.reply(200, r#"{}"#);

        block_on(client.show_history());

        assert_eq!(view.notifications(), vec![Notification::error(messages::HISTORY_FAILED)]);
    }

    #[test]
    fn test_hide_history_is_independent_of_stage() {
        let (client, transport, view) = setup();
        transport.reply(200, SUCCESS_REPLY);
        block_on(client.submit_file(&FakeFile::png(2048)));

        client.hide_history();

        assert_eq!(view.events().last(), Some(&ViewEvent::History(HistoryPanel::Hidden)));
        assert!(matches!(view.last_stage(), Some(Stage::Results(_))));
        assert!(client.current_translation_id().is_some());
    }
}
