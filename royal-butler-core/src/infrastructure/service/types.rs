//! Answer service request, response and error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outbound call body.
///
/// `sessionId` is always present on the wire and is `null` until a reply
/// has handed out a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    pub user_message: String,
    pub session_id: Option<String>,
}

impl AnswerRequest {
    pub fn new(user_message: impl Into<String>, session_id: Option<String>) -> Self {
        Self {
            user_message: user_message.into(),
            session_id,
        }
    }
}

/// Reply from the answer service.
///
/// `agent_response` is either plain text or an encoded object whose
/// `value` field holds the text; see [`resolve_answer`](crate::resolve_answer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerResponse {
    pub agent_response: Option<String>,
    pub session_id: Option<String>,
}

impl AnswerResponse {
    pub fn new(agent_response: impl Into<String>) -> Self {
        Self {
            agent_response: Some(agent_response.into()),
            session_id: None,
        }
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

/// Errors raised by an [`AnswerService`](super::AnswerService)
#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("network error calling answer service at '{endpoint}': {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error(
        "answer service rejected the request (status {}): {}",
        .status.map_or_else(|| "unknown".to_string(), |s| s.to_string()),
        .message.as_deref().unwrap_or("no details")
    )]
    Remote {
        status: Option<u16>,
        message: Option<String>,
    },
    #[error("answer service returned invalid response: {reason}")]
    InvalidResponse { reason: String },
}

impl AnswerError {
    pub fn network(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// A failure that carries a structured message from the service
    pub fn remote(status: Option<u16>, message: Option<String>) -> Self {
        Self::Remote { status, message }
    }

    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }

    /// Structured message supplied by the service, if it sent a usable one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AnswerError::Remote {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// Text to show in the chat: the server's message, else `apology`.
    pub fn user_message(&self, apology: &str) -> String {
        self.server_message().unwrap_or(apology).to_string()
    }
}
