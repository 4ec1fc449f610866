//! Image upload component with drag & drop support.
//!
//! Only picks the file; validation and the request itself belong to
//! [`crate::UploadClient::submit_file`].

use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::{messages, AppClient};

#[component]
pub fn UploadSection(client: AppClient) -> impl IntoView {
    let (drag_over, set_drag_over) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
    };

    let on_drop = {
        let client = client.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_drag_over.set(false);

            let dropped = ev
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0));
            if let Some(file) = dropped {
                submit(&client, file);
            }
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            submit(&client, file);
        }
        // Allow picking the same file again
        input.set_value("");
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    view! {
        <div
            class="upload-area"
            class:dragover=move || drag_over.get()
            id="uploadArea"
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <div class="upload-icon">"🖼️"</div>
            <div class="upload-text">{messages::DROP_HINT}</div>
            <div class="upload-hint">{messages::DROP_OR}</div>
            <button class="btn btn-primary" id="selectFileBtn" on:click=open_picker>
                {messages::SELECT_FILE}
            </button>
            <div class="upload-hint mt-20">{messages::FORMATS_HINT}</div>
            <input
                type="file"
                id="fileInput"
                accept="image/*"
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />
        </div>
    }
}

fn submit(client: &AppClient, file: File) {
    let client = client.clone();
    spawn_local(async move {
        client.submit_file(&file).await;
    });
}
