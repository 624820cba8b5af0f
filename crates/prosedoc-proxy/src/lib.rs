//! Credential-injecting relay to the upstream AI service.
//!
//! Clients post `{ "data": <payload> }` to [`PROXY_PATH`]. The proxy forwards
//! `<payload>` unchanged to the configured upstream URL with a bearer token
//! attached, and mirrors the upstream status and body back. It holds no state
//! and does not inspect the payload.

mod error;

pub use error::ProxyError;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};

pub const PROXY_PATH: &str = "/api/ai-proxy";

pub const DEFAULT_UPSTREAM_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Environment variable checked for the upstream key on every request.
pub const API_KEY_ENV: &str = "AI_SERVICE_API_KEY";

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub upstream_url: String,
    /// Bearer token used when `api_key_env` is unset or empty.
    pub api_key: Option<String>,
    /// Variable read per request, so a key provisioned after startup is used
    /// without a restart.
    pub api_key_env: Option<String>,
}

impl ProxyConfig {
    /// Key for the next upstream call. The environment wins over the
    /// configured value. Requests are refused while this is `None`.
    pub fn api_key(&self) -> Option<String> {
        self.api_key_env
            .as_deref()
            .and_then(|name| std::env::var(name).ok())
            .filter(|key| !key.is_empty())
            .or_else(|| self.api_key.clone())
    }
}

struct ProxyState {
    config: ProxyConfig,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct Envelope {
    data: Value,
}

/// Build the proxy router.
pub fn router(config: ProxyConfig) -> Router {
    let state = Arc::new(ProxyState {
        config,
        client: reqwest::Client::new(),
    });
    Router::new()
        .route(PROXY_PATH, any(relay))
        .with_state(state)
}

/// Bind `addr` and serve the proxy until the process is stopped.
pub async fn serve(addr: SocketAddr, config: ProxyConfig) -> Result<(), ProxyError> {
    if config.api_key().is_none() {
        error!("AI service API key is not configured; requests are refused until it is set");
    }
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        addr = %listener.local_addr()?,
        upstream = %config.upstream_url,
        "generation proxy listening"
    );
    axum::serve(listener, router(config)).await?;
    Ok(())
}

async fn relay(
    State(state): State<Arc<ProxyState>>,
    method: Method,
    body: Bytes,
) -> Result<Response, ProxyError> {
    if method != Method::POST {
        return Err(ProxyError::MethodNotAllowed);
    }
    let Some(api_key) = state.config.api_key() else {
        error!("AI service API key is not set");
        return Err(ProxyError::MissingApiKey);
    };
    let envelope: Envelope =
        serde_json::from_slice(&body).map_err(|_| ProxyError::MissingData)?;

    let upstream = state
        .client
        .post(&state.config.upstream_url)
        .bearer_auth(api_key)
        .json(&envelope.data)
        .send()
        .await
        .map_err(|e| {
            error!(error = %e, "error proxying request to AI service");
            ProxyError::Unreachable(e)
        })?;

    let upstream_status = upstream.status();
    let content_type = upstream
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json")
        .to_string();
    let bytes = upstream.bytes().await.map_err(|e| {
        error!(error = %e, "error reading AI service response");
        ProxyError::Unreachable(e)
    })?;

    let status = if upstream_status.is_success() {
        StatusCode::OK
    } else {
        StatusCode::from_u16(upstream_status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY)
    };
    info!(
        upstream_status = upstream_status.as_u16(),
        status = status.as_u16(),
        bytes = bytes.len(),
        "relayed AI service response"
    );

    Ok((status, [(CONTENT_TYPE, content_type)], bytes).into_response())
}
