//! UI Components
//!
//! Leptos components making up the chat widget.

mod chat_icon;
mod chat_panel;
mod toast_stack;

pub use chat_icon::ChatIcon;
pub use chat_panel::ChatPanel;
pub use toast_stack::{show_toast, ToastStack};
