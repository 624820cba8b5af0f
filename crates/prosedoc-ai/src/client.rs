//! HTTP client for the same-origin generation proxy.
//!
//! Two calls share one request shape: document drafting, which reports
//! failures to the caller, and jurisdiction tips, which never fails and falls
//! back to a fixed advisory sentence instead.

use prosedoc_core::DocumentGenerationRequest;
use prosedoc_core::prompt::{
    DRAFTING_SYSTEM_PROMPT, TIPS_SYSTEM_PROMPT, build_prompt, build_tips_prompt,
};
use prosedoc_core::CoreError;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::chat::{ChatRequest, DEFAULT_MODEL, ProxyEnvelope, extract_content};

/// Path of the proxy endpoint relative to the client's base URL.
pub const PROXY_PATH: &str = "/api/ai-proxy";

/// Returned by [`GenerationClient::jurisdiction_specific_tips`] whenever the call fails.
pub const TIPS_FALLBACK: &str =
    "Unable to load jurisdiction-specific tips. Please consult local court rules for guidance.";

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error(transparent)]
    Invalid(#[from] CoreError),
    /// The proxy answered with a non-success status.
    #[error("Failed to generate document content: {message}")]
    Upstream { status: u16, message: String },
    /// No response was received.
    #[error("Failed to generate document content. Please try again.")]
    Transport(#[source] reqwest::Error),
}

/// Client for the generation proxy.
pub struct GenerationClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GenerationClient {
    /// Create a client for the proxy served at `base_url`, e.g. `http://localhost:8787`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, PROXY_PATH)
    }

    /// Draft a document.
    ///
    /// A success response without `choices[0].message.content` is a soft miss:
    /// it is logged and returned as an empty string.
    pub async fn generate_document_content(
        &self,
        request: &DocumentGenerationRequest,
    ) -> Result<String, GenerationError> {
        request.validate()?;
        let prompt = build_prompt(request);

        info!(
            jurisdiction = %request.jurisdiction,
            document_type = %request.document_type,
            "requesting document generation"
        );
        match self.complete(DRAFTING_SYSTEM_PROMPT, prompt).await? {
            Some(content) => {
                info!(chars = content.len(), "document generated");
                Ok(content)
            }
            None => Ok(String::new()),
        }
    }

    /// Fetch preparation tips for a document type in a jurisdiction.
    pub async fn jurisdiction_specific_tips(&self, jurisdiction: &str, document_type: &str) -> String {
        let prompt = build_tips_prompt(jurisdiction, document_type);
        match self.complete(TIPS_SYSTEM_PROMPT, prompt).await {
            Ok(Some(tips)) => tips,
            Ok(None) => TIPS_FALLBACK.to_string(),
            Err(e) => {
                warn!(error = %e, jurisdiction, "jurisdiction tips unavailable");
                TIPS_FALLBACK.to_string()
            }
        }
    }

    /// Post one conversation through the proxy. `Ok(None)` means the response
    /// arrived but had no content at the expected path.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: String,
    ) -> Result<Option<String>, GenerationError> {
        let url = self.endpoint();
        let envelope = ProxyEnvelope {
            data: ChatRequest::new(&self.model, system_prompt, user_prompt),
        };

        let resp = self
            .client
            .post(&url)
            .json(&envelope)
            .send()
            .await
            .map_err(GenerationError::Transport)?;
        let status = resp.status();
        let body = resp.bytes().await.map_err(GenerationError::Transport)?;

        if !status.is_success() {
            return Err(GenerationError::Upstream {
                status: status.as_u16(),
                message: upstream_message(status.as_u16(), &body),
            });
        }

        let content = serde_json::from_slice::<Value>(&body)
            .ok()
            .and_then(|value| extract_content(&value));
        if content.is_none() {
            warn!(
                url = %url,
                body = %String::from_utf8_lossy(&body),
                "unexpected response structure from generation proxy"
            );
        }
        Ok(content)
    }
}

/// Best human-readable reason from an error response body.
///
/// Prefers an `error` string (or OpenAI-style `error.message`), then the raw
/// body, then a generic status line.
fn upstream_message(status: u16, body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        let error = value.get("error");
        if let Some(message) = error.and_then(Value::as_str) {
            return message.to_string();
        }
        if let Some(message) = error
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
        {
            return message.to_string();
        }
    }
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        format!("Request failed with status code {status}")
    } else {
        text.to_string()
    }
}
