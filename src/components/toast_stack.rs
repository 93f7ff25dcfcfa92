//! Toast Notifications
//!
//! Renders flash entries as toasts that dismiss themselves after a delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::FlashLevel;
use crate::store::{store_dismiss_toast, store_push_toast, use_chat_store, ChatStateStoreFields, ChatStore};

/// Show a toast and schedule its removal after `duration_ms`
pub fn show_toast(store: ChatStore, level: FlashLevel, text: String, duration_ms: u32) {
    let id = store_push_toast(&store, level, text);
    spawn_local(async move {
        TimeoutFuture::new(duration_ms).await;
        store_dismiss_toast(&store, id);
    });
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_chat_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.level.css_class() role="status">
                            <span class="toast-icon">{toast.level.icon()}</span>
                            <span class="toast-text">{toast.text}</span>
                            <button class="toast-close" on:click=move |_| store_dismiss_toast(&store, id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
