//! Figma client error types.

use thiserror::Error;

/// Result type for Figma API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors reported by a [`FigmaClient`](super::FigmaClient).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The API answered with a non-success status code.
    #[error("Figma API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response (connection, TLS, timeout).
    #[error("Request to Figma API failed: {0}")]
    Transport(String),

    /// The response body was not valid JSON.
    #[error("Failed to decode Figma API response: {0}")]
    Decode(String),

    /// The client could not be constructed from its configuration.
    #[error("Invalid Figma client configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Create a status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status code, if the API produced one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_carries_status_and_body() {
        let err = ApiError::status(403, r#"{"status":403,"err":"Invalid token"}"#);
        assert_eq!(err.status_code(), Some(403));
        let message = err.to_string();
        assert!(message.contains("403"));
        assert!(message.contains("Invalid token"));
    }

    #[test]
    fn test_transport_error_has_no_status() {
        assert_eq!(ApiError::transport("timed out").status_code(), None);
    }
}
