//! Error types and handling for the Figma MCP server.
//!
//! Setup and serving fail either while building the Figma client or while
//! running a transport; [`Error`] covers both so `main` sees one type.

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the server.
#[derive(Debug, Error)]
pub enum Error {
    /// The Figma API client could not be configured.
    #[error("Figma API error: {0}")]
    Api(#[from] super::api::ApiError),

    /// A transport failed to start or stopped with an error.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::ApiError;
    use crate::core::transport::TransportError;

    #[test]
    fn test_layer_errors_convert() {
        let err = Error::from(ApiError::config("invalid base URL"));
        assert_eq!(
            err.to_string(),
            "Figma API error: Invalid Figma client configuration: invalid base URL"
        );

        let err = Error::from(TransportError::init("stdin closed"));
        assert!(matches!(err, Error::Transport(_)));
    }
}
