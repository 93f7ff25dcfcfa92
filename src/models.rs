//! Frontend Models
//!
//! Data structures for the transcript, flash notifications and the chat route.

use serde::{Deserialize, Serialize};

/// Who wrote a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    /// Label rendered in front of the line
    pub fn label(self) -> &'static str {
        match self {
            Speaker::User => "You:",
            Speaker::Bot => "Bot:",
        }
    }
}

/// One line in the chat transcript
#[derive(Debug, Clone, PartialEq)]
pub struct ChatLine {
    pub speaker: Speaker,
    pub text: String,
}

impl ChatLine {
    pub fn user(text: impl Into<String>) -> Self {
        Self { speaker: Speaker::User, text: text.into() }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { speaker: Speaker::Bot, text: text.into() }
    }
}

/// Visual style of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Warning,
    Info,
}

impl FlashLevel {
    /// Map a server-side flash category onto a toast style
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "success" => FlashLevel::Success,
            "danger" => FlashLevel::Warning,
            _ => FlashLevel::Info,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            FlashLevel::Success => "toast success",
            FlashLevel::Warning => "toast warning",
            FlashLevel::Info => "toast info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            FlashLevel::Success => "✓",
            FlashLevel::Warning => "!",
            FlashLevel::Info => "i",
        }
    }
}

/// Flash entry as embedded by the page template: `[tag, message]`
#[derive(Debug, Clone, PartialEq)]
pub struct FlashEntry {
    pub tag: String,
    pub message: String,
}

impl FlashEntry {
    /// Decode one `[tag, message]` pair. A non-string message scalar is shown
    /// as its JSON text; anything else is rejected.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let [tag, message] = value.as_array()?.as_slice() else {
            return None;
        };
        let message = match message {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => return None,
            other => other.to_string(),
        };
        Some(Self {
            tag: tag.as_str()?.to_string(),
            message,
        })
    }

    pub fn level(&self) -> FlashLevel {
        FlashLevel::from_tag(&self.tag)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A toast currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: FlashLevel,
    pub text: String,
}

/// Body of `POST <endpoint>`
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Response of the chat route
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_level_table() {
        assert_eq!(FlashLevel::from_tag("success"), FlashLevel::Success);
        assert_eq!(FlashLevel::from_tag("danger"), FlashLevel::Warning);
        assert_eq!(FlashLevel::from_tag("info"), FlashLevel::Info);
        assert_eq!(FlashLevel::from_tag("warning"), FlashLevel::Info);
        assert_eq!(FlashLevel::from_tag(""), FlashLevel::Info);
    }

    #[test]
    fn test_flash_entry_from_pair() {
        let entry = FlashEntry::from_value(&serde_json::json!(["danger", "Oops"])).unwrap();
        assert_eq!(entry.level(), FlashLevel::Warning);
        assert_eq!(entry.message(), "Oops");
    }

    #[test]
    fn test_flash_entry_scalar_message() {
        let entry = FlashEntry::from_value(&serde_json::json!(["info", 5])).unwrap();
        assert_eq!(entry.message(), "5");
        let entry = FlashEntry::from_value(&serde_json::json!(["info", true])).unwrap();
        assert_eq!(entry.message(), "true");
    }

    #[test]
    fn test_flash_entry_rejects_bad_shapes() {
        assert!(FlashEntry::from_value(&serde_json::json!(["success"])).is_none());
        assert!(FlashEntry::from_value(&serde_json::json!(["a", "b", "c"])).is_none());
        assert!(FlashEntry::from_value(&serde_json::json!([1, "Hi"])).is_none());
        assert!(FlashEntry::from_value(&serde_json::json!(["info", {"text": "Hi"}])).is_none());
        assert!(FlashEntry::from_value(&serde_json::json!("success")).is_none());
    }

    #[test]
    fn test_chat_request_body() {
        let body = serde_json::to_string(&ChatRequest { message: "hello" }).unwrap();
        assert_eq!(body, r#"{"message":"hello"}"#);
    }

    #[test]
    fn test_chat_reply_ignores_extra_fields() {
        let reply: ChatReply = serde_json::from_str(r#"{"reply":"hi","took_ms":12}"#).unwrap();
        assert_eq!(reply.reply, "hi");
    }

    #[test]
    fn test_chat_reply_requires_reply() {
        assert!(serde_json::from_str::<ChatReply>(r#"{"answer":"hi"}"#).is_err());
    }
}
