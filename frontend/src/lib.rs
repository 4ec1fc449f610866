//! OCR Translator - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads an image to the translation
//! backend, shows the recognized English text with its Russian
//! translation, and lets the user download or browse past results.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (history button)                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection or ProgressSection                       │
//! │  ├── ResultsSection (after a successful upload)             │
//! │  └── HistorySection (when opened)                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer, NotificationToast                                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Components only forward events to [`UploadClient`]; it decides what
//! happens and renders through [`SignalView`].
//!
//! # Modules
//!
//! - [`types`] - Records, view state and errors
//! - [`client`] - The upload workflow controller
//! - [`view`] - Rendering seam and its Leptos implementation
//! - [`components`] - UI components
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod messages;
pub mod display;
pub mod types;
pub mod services;
pub mod view;
pub mod client;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Records
    Translation, TranslationId, HistoryEntry,
    // View state
    Stage, Progress, HistoryPanel, HistoryItemView, Notification, NotificationKind,
    // Errors
    Action, AppError, AppResult,
};

// Controller & view
pub use client::UploadClient;
pub use view::{SignalView, TranslatorView};

// Components
pub use components::*;

// Services
pub use services::GlooTransport;

/// The controller wired to the browser.
pub type AppClient = UploadClient<GlooTransport, SignalView>;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic/console hooks and mount the app.
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 OCR Translator - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=messages::APP_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let signals = SignalView::new();
    let client: AppClient = UploadClient::new(GlooTransport::new(BACKEND_URL), signals, ClientConfig::default());

    let workflow = {
        let client = client.clone();
        move || match signals.stage.get() {
            Stage::Idle => view! { <UploadSection client=client.clone()/> }.into_view(),
            Stage::Uploading(progress) => view! { <ProgressSection progress=progress/> }.into_view(),
            Stage::Results(translation) => view! {
                <UploadSection client=client.clone()/>
                <ResultsSection client=client.clone() translation=translation/>
            }
            .into_view(),
        }
    };

    let history = {
        let client = client.clone();
        move || match signals.history.get() {
            HistoryPanel::Hidden => ().into_view(),
            HistoryPanel::Shown(items) => view! { <HistorySection client=client.clone() items=items/> }.into_view(),
        }
    };

    view! {
        <Header client=client/>

        <div class="container">
            <Hero/>
            {workflow}
            {history}
        </div>

        <Footer/>
        <NotificationToast notification=signals.notification/>
    }
}
