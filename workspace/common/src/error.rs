use crate::payload::PayloadError;
use serde::{Deserialize, Serialize};

/// Message shown when a creation fails without a usable server explanation.
pub const CREATE_FALLBACK_MESSAGE: &str = "Failed to create";

/// Error body the backend may attach to a failed request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Everything that can go wrong talking to the backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP error: {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

impl ClientError {
    /// Builds the error for a non-2xx creation response from its raw body.
    pub fn creation_failure(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorDetail>(body)
            .ok()
            .and_then(|e| e.detail);
        ClientError::Status { status, detail }
    }

    /// Text for the blocking notification a failed creation raises.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ClientError::Payload(e) => e.to_string(),
            _ => CREATE_FALLBACK_MESSAGE.to_string(),
        }
    }
}
