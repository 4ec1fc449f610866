use leptos::*;

use crate::Progress;

#[component]
pub fn ProgressSection(progress: Progress) -> impl IntoView {
    view! {
        <div class="progress-container" id="progressContainer">
            <div class="progress-bar">
                <div class="progress-fill" style=format!("width: {}%;", progress.percent)></div>
            </div>
            <div class="progress-text">{progress.label}</div>
        </div>
    }
}
