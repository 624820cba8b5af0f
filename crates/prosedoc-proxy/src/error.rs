use axum::http::StatusCode;
use axum::http::header::ALLOW;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Internal Server Error: API key not configured.")]
    MissingApiKey,

    #[error("Request body must contain a 'data' field.")]
    MissingData,

    #[error("Failed to proxy request to AI service.")]
    Unreachable(#[source] reqwest::Error),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingData => StatusCode::BAD_REQUEST,
            Self::MissingApiKey | Self::Unreachable(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::MethodNotAllowed => (status, [(ALLOW, "POST")], self.to_string()).into_response(),
            _ => (status, Json(json!({ "error": self.to_string() }))).into_response(),
        }
    }
}
