//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The static list of tool names
//! - Tool metadata for listing
//! - HTTP dispatch for tool calls (when http feature is enabled)
//!
//! Everything is generated from [`all_tools!`], so the STDIO router and the
//! HTTP dispatcher always expose the same set.

use rmcp::handler::server::tool::ToolRoute;
use rmcp::model::Tool;
#[cfg(feature = "http")]
use serde_json::Value;
#[cfg(feature = "http")]
use tracing::warn;

use super::definitions::*;
use super::handlers::{FigmaTool, create_route, to_tool};
#[cfg(feature = "http")]
use super::{ToolError, handlers::http_handler};
use crate::core::api::SharedClient;

/// Signature of a tool's HTTP entry point.
#[cfg(feature = "http")]
pub type HttpHandler = fn(Value, SharedClient) -> Result<Value, String>;

macro_rules! registry_tables {
    ($($tool:ident),* $(,)?) => {
        /// Names of every tool, in listing order.
        pub const TOOL_NAMES: &[&str] = &[$(<$tool as FigmaTool>::NAME),*];

        fn tool_metadata() -> Vec<Tool> {
            vec![$(to_tool::<$tool>()),*]
        }

        /// One rmcp route per tool, all sharing `client`.
        pub(crate) fn tool_routes<S>(client: &SharedClient) -> Vec<ToolRoute<S>>
        where
            S: Send + Sync + 'static,
        {
            vec![$(create_route::<$tool, S>(client.clone())),*]
        }

        #[cfg(feature = "http")]
        const HTTP_HANDLERS: &[(&str, HttpHandler)] =
            &[$((<$tool as FigmaTool>::NAME, http_handler::<$tool> as HttpHandler)),*];
    };
}

all_tools!(registry_tables);

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - lists tools and dispatches HTTP tool calls.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    client: SharedClient,
}

impl ToolRegistry {
    /// Create a registry whose tools call Figma through `client`.
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }

    /// Get all tools as Tool models (metadata), in listing order.
    pub fn get_all_tools() -> Vec<Tool> {
        tool_metadata()
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub fn call_tool(&self, name: &str, arguments: Value) -> Result<Value, String> {
        match HTTP_HANDLERS.iter().find(|(tool, _)| *tool == name) {
            Some((_, handler)) => handler(arguments, self.client.clone()),
            None => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name).to_string())
            }
        }
    }
}
