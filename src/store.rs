//! Widget State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ChatLine, FlashLevel, Toast};
use crate::transcript::{self, PanelVisibility};

/// Widget state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ChatState {
    /// Lines shown in the chat log, oldest first
    pub transcript: Vec<ChatLine>,
    /// Toasts currently on screen
    pub toasts: Vec<Toast>,
    /// Panel visibility, hidden until the icon is clicked
    pub panel: PanelVisibility,
    /// Id handed to the next toast
    pub next_toast_id: u32,
    /// Text currently typed in the composer
    pub draft: String,
}

impl ChatState {
    /// Initial state: greeting line, hidden panel, no toasts
    pub fn new(username: Option<&str>) -> Self {
        Self {
            transcript: vec![ChatLine::bot(transcript::greeting(username))],
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ChatStore = Store<ChatState>;

/// Get the chat store from context
pub fn use_chat_store() -> ChatStore {
    expect_context::<ChatStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a line to the transcript
pub fn store_push_line(store: &ChatStore, line: ChatLine) {
    store.transcript().write().push(line);
}

/// Take the composer text for sending.
///
/// Blank input leaves the store untouched and returns `None`. Otherwise the
/// trimmed text is appended as a user line, the draft is cleared and the text
/// to POST is returned.
pub fn store_submit(store: &ChatStore) -> Option<String> {
    let draft = store.draft();
    let msg = transcript::prepare_outgoing(&draft.read_untracked())?;
    store_push_line(store, ChatLine::user(msg.clone()));
    store.draft().set(String::new());
    Some(msg)
}

/// Append the bot's reply, or hand the error back for logging
pub fn store_apply_reply(store: &ChatStore, reply: Result<String, String>) -> Result<(), String> {
    let text = reply?;
    store_push_line(store, ChatLine::bot(text));
    Ok(())
}

/// Flip panel visibility and return the new value
pub fn store_toggle_panel(store: &ChatStore) -> PanelVisibility {
    let field = store.panel();
    let mut panel = field.write();
    *panel = panel.toggled();
    *panel
}

/// Show a toast and return its id
pub fn store_push_toast(store: &ChatStore, level: FlashLevel, text: String) -> u32 {
    let id = {
        let field = store.next_toast_id();
        let mut next = field.write();
        let id = *next;
        *next += 1;
        id
    };
    store.toasts().write().push(Toast { id, level, text });
    id
}

/// Remove a toast by ID (no-op if already gone)
pub fn store_dismiss_toast(store: &ChatStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}
