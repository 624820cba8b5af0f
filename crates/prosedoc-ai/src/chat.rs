//! Chat-completion request payloads and response extraction.

use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_MODEL: &str = "gpt-4-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

/// Body forwarded verbatim by the proxy to the upstream chat-completion API.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl ChatRequest {
    /// A two-message conversation: fixed system prompt, then the user prompt.
    pub fn new(model: &str, system_prompt: &str, user_prompt: String) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage::system(system_prompt), ChatMessage::user(user_prompt)],
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// What the proxy expects: the upstream payload wrapped in a `data` field.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProxyEnvelope<T> {
    pub data: T,
}

/// Read `choices[0].message.content` from a chat-completion response.
///
/// Returns `None` when the path is missing. A message whose content is null
/// or not a string yields an empty string.
pub fn extract_content(response: &Value) -> Option<String> {
    let message = response.get("choices")?.get(0)?.get("message")?;
    Some(
        message
            .get("content")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    )
}
