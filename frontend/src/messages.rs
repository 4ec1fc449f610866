//! User-facing strings.
//!
//! The service targets Russian-speaking users, so every label and
//! notification shown in the page lives here.

// Validation
pub const WRONG_TYPE: &str = "Пожалуйста, выберите изображение";
pub const FILE_TOO_LARGE: &str = "Размер файла не должен превышать 5 МБ";

// Progress checkpoints
pub const PROGRESS_UPLOADING: &str = "Загрузка изображения...";
pub const PROGRESS_RECOGNIZING: &str = "Распознавание текста...";
pub const PROGRESS_TRANSLATING: &str = "Перевод текста...";
pub const PROGRESS_DONE: &str = "Готово!";

// Outcomes
pub const UPLOAD_SUCCESS: &str = "Изображение успешно обработано!";
pub const UPLOAD_FAILED: &str = "Произошла ошибка при обработке";
pub const DOWNLOAD_SUCCESS: &str = "Файл успешно скачан!";
pub const DOWNLOAD_FAILED: &str = "Ошибка при скачивании";
pub const HISTORY_FAILED: &str = "Ошибка загрузки истории";
pub const MISSING_TRANSLATION_ID: &str = "Ошибка: ID перевода не найден";
pub const CONNECTION_ERROR: &str = "Ошибка соединения с сервером";
pub const READY_FOR_NEW: &str = "Готов к новому переводу";

// Page labels
pub const APP_TITLE: &str = "OCR Переводчик";
pub const APP_SUBTITLE: &str = "Распознавание английского текста на изображении и перевод на русский язык";
pub const DROP_HINT: &str = "Перетащите изображение сюда";
pub const DROP_OR: &str = "или";
pub const SELECT_FILE: &str = "Выбрать файл";
pub const FORMATS_HINT: &str = "Поддерживаются JPG, PNG, JPEG до 5 МБ";
pub const ORIGINAL: &str = "Оригинал";
pub const TRANSLATION: &str = "Перевод";
pub const DOWNLOAD: &str = "Скачать";
pub const DOWNLOAD_TRANSLATION: &str = "Скачать перевод";
pub const NEW_TRANSLATION: &str = "Новый перевод";
pub const HISTORY: &str = "История";
pub const HISTORY_TITLE: &str = "История переводов";
pub const HISTORY_EMPTY: &str = "История переводов пуста";
pub const CLOSE: &str = "Закрыть";
pub const RESULTS_TITLE: &str = "Результат";
pub const PREVIEW_ALT: &str = "Загруженное изображение";
