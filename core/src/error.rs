//! Error types for the todolist client.
//!
//! # Design
//! Two tiers. `ApiError` covers everything that goes wrong before the client
//! holds a well-formed API envelope: the transport, unexpected HTTP statuses,
//! and (de)serialization. `SyncError` is what an orchestration call returns,
//! adding the application-level rejection carried in `resultCode`/`messages`.
//! Both expose `user_message()`, which is what ends up in the global error
//! field.

use thiserror::Error;

use crate::types::{ItemId, ListId};

/// Fallback shown when the server rejects a request without a message.
pub const GENERIC_ERROR_MESSAGE: &str = "Some error occurred";

/// Errors raised while executing a request or decoding its response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a status other than the expected one.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// A successful create response did not include the created entity.
    #[error("response is missing its payload")]
    MissingPayload,
}

impl ApiError {
    /// Best-effort human-readable message. For HTTP errors the server's JSON
    /// `message` (or `error`) field is preferred over the raw body.
    pub fn user_message(&self) -> String {
        if let ApiError::Http { body, .. } = self {
            if let Some(message) = message_from_body(body) {
                return message;
            }
        }
        self.to_string()
    }
}

fn message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(key).and_then(|v| v.as_str()))
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

/// Outcome of a failed orchestration call.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The server processed the request and refused it.
    #[error("request rejected with result code {result_code}")]
    Rejected {
        result_code: i32,
        messages: Vec<String>,
    },

    #[error(transparent)]
    Transport(#[from] ApiError),

    #[error("list {0} is not in the local state")]
    UnknownList(ListId),

    #[error("item {item_id} is not in list {list_id}")]
    UnknownItem { list_id: ListId, item_id: ItemId },
}

impl SyncError {
    pub fn rejected(result_code: i32, messages: Vec<String>) -> Self {
        SyncError::Rejected {
            result_code,
            messages,
        }
    }

    /// Message for the global error field: the server's first message, a
    /// generic fallback, or the transport error text.
    pub fn user_message(&self) -> String {
        match self {
            SyncError::Rejected { messages, .. } => messages
                .first()
                .filter(|message| !message.is_empty())
                .cloned()
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            SyncError::Transport(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_prefers_first_message() {
        let err = SyncError::rejected(1, vec!["Title too long".into(), "second".into()]);
        assert_eq!(err.user_message(), "Title too long");
    }

    #[test]
    fn rejected_without_messages_uses_fallback() {
        let err = SyncError::rejected(1, Vec::new());
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn http_error_reads_json_message() {
        let err = ApiError::Http {
            status: 500,
            body: r#"{"message":"backend exploded"}"#.to_string(),
        };
        assert_eq!(err.user_message(), "backend exploded");
    }

    #[test]
    fn http_error_without_json_falls_back_to_display() {
        let err = SyncError::from(ApiError::Http {
            status: 502,
            body: "bad gateway".to_string(),
        });
        assert_eq!(err.user_message(), "HTTP 502: bad gateway");
    }

    #[test]
    fn transport_error_message() {
        let err = SyncError::from(ApiError::Transport("connection refused".into()));
        assert_eq!(err.user_message(), "transport failure: connection refused");
    }
}
