//! Figma MCP Server Library
//!
//! Exposes the Figma REST API as Model Context Protocol (MCP) tools. Each
//! tool maps onto exactly one endpoint: it validates the required
//! parameters, forwards the optional ones that were supplied, and returns the
//! response JSON as is.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the Figma API client, the
//!   server and its transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: One MCP tool per Figma endpoint
//!
//! # Example
//!
//! ```rust,no_run
//! use figma_mcp_server::core::{Config, McpServer, TransportService};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = TransportService::new(config.transport.clone());
//!     let server = McpServer::new(config)?;
//!
//!     tokio::runtime::Runtime::new()?.block_on(transport.run(server))?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
