//! Past translations with per-item download.

use leptos::*;

use crate::components::scroll_into_view;
use crate::{messages, AppClient, HistoryItemView};

#[component]
pub fn HistorySection(client: AppClient, items: Vec<HistoryItemView>) -> impl IntoView {
    let section = create_node_ref::<html::Div>();
    section.on_load(|el| {
        let element: &web_sys::Element = &el;
        scroll_into_view(element.clone());
    });

    let on_close = {
        let client = client.clone();
        move |_| client.hide_history()
    };

    let list = if items.is_empty() {
        view! { <p class="history-empty">{messages::HISTORY_EMPTY}</p> }.into_view()
    } else {
        items
            .into_iter()
            .map(|item| view! { <HistoryItem client=client.clone() item=item/> })
            .collect_view()
    };

    view! {
        <div class="history-section" id="historySection" node_ref=section>
            <div class="history-header">
                <h2>{messages::HISTORY_TITLE}</h2>
                <button class="btn btn-secondary" id="closeHistoryBtn" on:click=on_close>
                    {messages::CLOSE}
                </button>
            </div>
            <div class="history-list" id="historyList">{list}</div>
        </div>
    }
}

#[component]
fn HistoryItem(client: AppClient, item: HistoryItemView) -> impl IntoView {
    let HistoryItemView { id, date, original_excerpt, translated_excerpt } = item;
    let label = format!("#{}", id);

    let on_download = move |_| {
        let client = client.clone();
        let id = id.clone();
        spawn_local(async move {
            client.download_translation(Some(id)).await;
        });
    };

    view! {
        <div class="history-item">
            <div class="history-item-header">
                <span class="history-id">{label}</span>
                <span class="history-date">{date}</span>
            </div>
            <div class="history-texts">
                <div class="history-text">
                    <h4>{messages::ORIGINAL}</h4>
                    <div>{original_excerpt}</div>
                </div>
                <div class="history-text">
                    <h4>{messages::TRANSLATION}</h4>
                    <div>{translated_excerpt}</div>
                </div>
            </div>
            <div class="history-actions">
                <button class="btn btn-success" on:click=on_download>
                    "⬇ " {messages::DOWNLOAD}
                </button>
            </div>
        </div>
    }
}
