//! Recognized text, its translation and the follow-up actions.

use leptos::*;

use crate::components::scroll_into_view;
use crate::{messages, AppClient, Translation};

#[component]
pub fn ResultsSection(client: AppClient, translation: Translation) -> impl IntoView {
    let section = create_node_ref::<html::Div>();
    section.on_load(|el| {
        let element: &web_sys::Element = &el;
        scroll_into_view(element.clone());
    });

    let on_download = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn_local(async move {
                client.download_translation(None).await;
            });
        }
    };

    let on_new_translation = move |_| client.reset();

    let Translation { image_preview, original_text, translated_text, .. } = translation;

    view! {
        <div class="results-section" id="resultsSection" node_ref=section>
            <h2>{messages::RESULTS_TITLE}</h2>
            <div class="image-preview">
                <img id="previewImage" src=image_preview alt=messages::PREVIEW_ALT/>
            </div>
            <div class="text-results">
                <div class="text-block">
                    <h3>{messages::ORIGINAL}</h3>
                    <div class="text-content" id="originalText">{original_text}</div>
                </div>
                <div class="text-block">
                    <h3>{messages::TRANSLATION}</h3>
                    <div class="text-content" id="translatedText">{translated_text}</div>
                </div>
            </div>
            <div class="actions">
                <button class="btn btn-success" id="downloadBtn" on:click=on_download>
                    "⬇ " {messages::DOWNLOAD_TRANSLATION}
                </button>
                <button class="btn btn-secondary" id="newTranslationBtn" on:click=on_new_translation>
                    {messages::NEW_TRANSLATION}
                </button>
            </div>
        </div>
    }
}
