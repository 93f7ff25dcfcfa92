//! Chat Widget App
//!
//! Root component: launcher icon, chat panel and the toast stack.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{show_toast, ChatIcon, ChatPanel, ToastStack};
use crate::config::WidgetConfig;
use crate::models::FlashEntry;
use crate::store::ChatState;

#[component]
pub fn ChatWidget(
    config: WidgetConfig,
    username: Option<String>,
    flashes: Vec<FlashEntry>,
) -> impl IntoView {
    let store = Store::new(ChatState::new(username.as_deref()));

    // Provide context to all children
    provide_context(store);
    provide_context(config.clone());

    web_sys::console::log_1(&format!("[FLASH] Showing {} flash messages", flashes.len()).into());
    for entry in flashes {
        show_toast(store, entry.level(), entry.message().to_string(), config.toast_duration_ms);
    }

    view! {
        <div class="chatbot">
            <ToastStack />
            <ChatPanel />
            <ChatIcon />
        </div>
    }
}
