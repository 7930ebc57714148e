//! Core infrastructure shared by every tool.
//!
//! This module provides error handling, configuration, the Figma API client,
//! server lifecycle management and transport layer abstractions.

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use api::{FigmaClient, HttpFigmaClient, SharedClient};
pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
