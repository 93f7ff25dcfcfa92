//! Chat Commands
//!
//! Sends a user message to the chat route and decodes the reply.

use crate::models::{ChatReply, ChatRequest};
use super::post_json;

/// Send `message` to `endpoint` and return the bot's reply text
pub async fn send_chat_message(endpoint: &str, message: &str) -> Result<String, String> {
    let body = serde_json::to_string(&ChatRequest { message }).map_err(|e| e.to_string())?;
    let result = post_json(endpoint, &body).await?;
    let reply: ChatReply = serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())?;
    Ok(reply.reply)
}
