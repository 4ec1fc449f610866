//! Toast shown for every controller notification.

use leptos::*;

use crate::Notification;

#[component]
pub fn NotificationToast(notification: RwSignal<Option<Notification>>) -> impl IntoView {
    let class_name = move || match notification.get() {
        Some(n) => format!("notification {} show", n.kind.css_class()),
        None => "notification".to_string(),
    };

    view! {
        <div class=class_name id="notification">
            {move || notification.get().map(|n| n.message).unwrap_or_default()}
        </div>
    }
}
