//! LLM integration: chat-completion payloads and the client for the generation proxy.

pub mod chat;
pub mod client;

pub use chat::{ChatMessage, ChatRequest, DEFAULT_MODEL, DEFAULT_TEMPERATURE, ProxyEnvelope};
pub use client::{GenerationClient, GenerationError, PROXY_PATH, TIPS_FALLBACK};
