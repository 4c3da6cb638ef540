//! Error type shared by the API client and the state primitives.
//!
//! Exactly one failure kind is modeled at this layer: "the operation failed",
//! carrying enough context to derive a message a person can read. Whether the
//! failure was a refused connection, a server-side validation reply or a body
//! that would not decode is the operation's business; [`Query`](crate::query::Query)
//! and [`Mutation`](crate::mutation::Mutation) only consume the derived message.

use serde::Deserialize;
use thiserror::Error;

/// Fallback message used when a failure carries nothing readable.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// Error type for API operations.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// The server replied with a non-success status.
    ///
    /// `detail` holds the server-supplied message when the response body was
    /// a JSON object with a `detail` field, the shape the backend uses for
    /// all of its error replies.
    #[error("Request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// The request never produced a response (DNS, connect, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The response arrived but its body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Derives the message to surface to a person.
    ///
    /// Preference order: server-supplied `detail`, then the transport or
    /// decode message, then [`DEFAULT_ERROR_MESSAGE`].
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Status { detail: None, .. } => DEFAULT_ERROR_MESSAGE.to_string(),
            Self::Network(message) | Self::Decode(message) => message.clone(),
        }
    }
}

/// Error body shape produced by the backend (`{"detail": "..."}`).
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_message_prefers_detail() {
        let err = ApiError::Status {
            status: 404,
            detail: Some("not found".to_string()),
        };
        assert_eq!(err.display_message(), "not found");
    }

    #[test]
    fn test_display_message_uses_transport_message() {
        let err = ApiError::Network("network down".to_string());
        assert_eq!(err.display_message(), "network down");

        let err = ApiError::Decode("expected value at line 1".to_string());
        assert_eq!(err.display_message(), "expected value at line 1");
    }

    #[test]
    fn test_display_message_falls_back_to_default() {
        let err = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(err.display_message(), DEFAULT_ERROR_MESSAGE);
        assert_eq!(err.display_message(), "An error occurred");
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Status {
            status: 500,
            detail: Some("ignored by Display".to_string()),
        };
        assert_eq!(err.to_string(), "Request failed with status 500");

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_error_body_with_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "Failed to fetch projects"}"#).expect("valid body");
        assert_eq!(body.detail.as_deref(), Some("Failed to fetch projects"));
    }

    #[test]
    fn test_error_body_without_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "something"}"#).expect("object");
        assert!(body.detail.is_none());
    }
}
