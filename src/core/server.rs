//! MCP Server implementation and lifecycle management.
//!
//! [`McpServer`] owns the Figma client and the tool router built from the
//! tool registry. It only advertises the tools capability.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::{info, warn};

use super::api::{HttpFigmaClient, SharedClient};
use super::config::{Config, FigmaAuth};
use super::error::Result as CoreResult;
use crate::domains::tools::{ToolRegistry, build_tool_router};

const INSTRUCTIONS: &str = "Tools for the Figma REST API. Each tool calls one endpoint and \
     returns the response JSON unmodified. Files are addressed by file_key, the id in a file \
     URL (figma.com/file/<file_key>/...); node ids look like \"1:2\". Paginated endpoints \
     return a cursor that must be passed back explicitly to fetch the next page.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Client every tool sends its request through.
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    client: SharedClient,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a server talking to the Figma API configured in `config`.
    ///
    /// The HTTP client is blocking; call this outside of an async context.
    pub fn new(config: Config) -> CoreResult<Self> {
        let client = HttpFigmaClient::new(&config.figma)?;
        info!("Figma API client ready for {}", config.figma.base_url);

        match config.figma.auth() {
            Some(FigmaAuth::OAuth(_)) => info!("Authenticating with a Figma OAuth token"),
            Some(FigmaAuth::AccessToken(_)) => {
                info!("Authenticating with a Figma personal access token")
            }
            None => warn!(
                "No Figma credentials configured. Set MCP_FIGMA_ACCESS_TOKEN \
                 (or MCP_FIGMA_OAUTH_TOKEN); API calls will be rejected with 403"
            ),
        }

        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Create a server with an explicit client.
    pub fn with_client(config: Config, client: SharedClient) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            config: Arc::new(config),
            client,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// The call runs on the blocking thread pool.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let registry = ToolRegistry::new(self.client.clone());
        let name = name.to_string();

        tokio::task::spawn_blocking(move || registry.call_tool(&name, arguments))
            .await
            .map_err(|e| format!("Tool task failed: {}", e))?
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
