//! Chat Launcher Icon
//!
//! Floating button that shows and hides the chat panel.

use leptos::prelude::*;

use crate::store::{store_toggle_panel, use_chat_store, ChatStateStoreFields};

#[component]
pub fn ChatIcon() -> impl IntoView {
    let store = use_chat_store();

    let toggle = move |_| {
        let panel = store_toggle_panel(&store);
        web_sys::console::log_1(&format!("[CHAT] Panel {:?}", panel).into());
    };

    view! {
        <button
            id="chatbot-icon"
            class=move || if store.panel().get().is_shown() { "chatbot-icon open" } else { "chatbot-icon" }
            title="Chat"
            aria-expanded=move || store.panel().get().is_shown().to_string()
            on:click=toggle
        >
            "💬"
        </button>
    }
}
