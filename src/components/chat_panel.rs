//! Chat Panel Component
//!
//! Transcript log plus the composer. Sends each message to the chat route
//! and appends the reply when it arrives.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::config::WidgetConfig;
use crate::store::{store_apply_reply, store_submit, use_chat_store, ChatStateStoreFields};

#[component]
pub fn ChatPanel() -> impl IntoView {
    let store = use_chat_store();
    let endpoint = StoredValue::new(expect_context::<WidgetConfig>().endpoint);

    let log_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest line in view
    Effect::new(move |_| {
        let _ = store.transcript().read().len();
        request_animation_frame(move || {
            if let Some(log) = log_ref.get_untracked() {
                log.set_scroll_top(log.scroll_height());
            }
        });
    });

    let send = move || {
        let Some(msg) = store_submit(&store) else {
            return;
        };

        let endpoint = endpoint.get_value();
        spawn_local(async move {
            let reply = commands::send_chat_message(&endpoint, &msg).await;
            if let Err(e) = store_apply_reply(&store, reply) {
                web_sys::console::error_1(&format!("[CHAT] {} failed: {}", endpoint, e).into());
            }
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.is_composing() {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <div
            id="chat-window"
            class="chat-window"
            style:display=move || store.panel().get().display()
        >
            <div id="chat-log" class="chat-log" node_ref=log_ref>
                <For
                    each=move || store.transcript().get().into_iter().enumerate()
                    key=|(idx, _)| *idx
                    children=move |(_, line)| {
                        view! {
                            <div class="chat-line">
                                <b>{line.speaker.label()}</b>
                                " "
                                {line.text}
                            </div>
                        }
                    }
                />
            </div>
            <div class="chat-composer">
                <input
                    id="user-input"
                    type="text"
                    placeholder="Type a message..."
                    autocomplete="off"
                    prop:value=move || store.draft().get()
                    on:input=move |ev| store.draft().set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button type="button" on:click=move |_| send()>"Send"</button>
            </div>
        </div>
    }
}
