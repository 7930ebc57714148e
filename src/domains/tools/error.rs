//! Tool-specific error types.

use thiserror::Error;

use crate::core::api::ApiError;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool. Raised before any request
    /// is sent.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The Figma API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a "missing required parameter" error.
    pub fn missing_parameter(name: &str) -> Self {
        Self::InvalidArguments(format!("Missing required parameter '{}'", name))
    }

    /// Whether this error was raised locally, before any network I/O.
    pub fn is_invalid_arguments(&self) -> bool {
        matches!(self, Self::InvalidArguments(_))
    }
}
