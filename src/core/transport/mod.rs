//! How MCP clients reach the Figma tools.
//!
//! - `stdio` (default feature): rmcp over stdin/stdout, for clients that
//!   spawn the server
//! - `http` (feature): stateless JSON-RPC over POST, for clients that call
//!   a running server
//!
//! Both expose the same tool set; `MCP_TRANSPORT` picks one at startup.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
