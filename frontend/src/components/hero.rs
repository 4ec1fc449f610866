//! Hero section component

use leptos::*;

use crate::messages;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{messages::APP_TITLE}</h1>
            <p class="subtitle">{messages::APP_SUBTITLE}</p>
        </div>
    }
}
