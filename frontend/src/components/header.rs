use leptos::*;

use crate::{messages, AppClient};

#[component]
pub fn Header(client: AppClient) -> impl IntoView {
    let on_history_click = move |_| {
        log::info!("📜 Loading history...");
        let client = client.clone();
        spawn_local(async move {
            client.show_history().await;
        });
    };

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">{messages::APP_TITLE}</a>
            </div>
            <div class="header-right">
                <button class="btn btn-secondary" id="historyBtn" on:click=on_history_click>
                    "📜 " {messages::HISTORY}
                </button>
            </div>
        </header>
    }
}
