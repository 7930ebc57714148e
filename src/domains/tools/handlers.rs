//! Tool handlers.
//!
//! Every Figma tool has the same shape: deserialize its parameters, turn them
//! into an [`ApiRequest`], send it, return the decoded body. [`FigmaTool`]
//! captures the per-endpoint part; everything else here is written once and
//! shared by all tools:
//!
//! - [`invoke`] - parse arguments and execute against a client (blocking)
//! - [`to_tool`] - rmcp `Tool` metadata with a schema derived from the params
//! - [`create_route`] - rmcp `ToolRoute` for STDIO transport
//! - [`http_handler`] - JSON-RPC dispatch target for HTTP transport
//!
//! The client is blocking, so async callers go through [`call_blocking`] or
//! `spawn_blocking`.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, info, warn};

use super::ToolError;
use crate::core::api::{ApiRequest, FigmaClient, SharedClient};

/// A Figma REST endpoint exposed as a tool.
pub trait FigmaTool: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Tool arguments. Required parameters are plain fields, optional ones
    /// are `Option`s.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Build the request for `params`, failing if a required parameter is
    /// missing or unusable.
    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError>;
}

/// Deserialize tool arguments.
pub fn parse_arguments<T: FigmaTool>(arguments: Value) -> Result<T::Params, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Build and send the request for already-parsed parameters.
pub fn execute<T: FigmaTool>(
    client: &dyn FigmaClient,
    params: &T::Params,
) -> Result<Value, ToolError> {
    let request = T::request(params)?;
    info!(tool = T::NAME, "{} {}", request.verb, request.target());

    request.send(client).map_err(|e| {
        error!(tool = T::NAME, "Figma API call failed: {}", e);
        ToolError::from(e)
    })
}

/// Parse `arguments` and execute the tool. Blocks on the network call.
pub fn invoke<T: FigmaTool>(client: &dyn FigmaClient, arguments: Value) -> Result<Value, ToolError> {
    parse_arguments::<T>(arguments)
        .and_then(|params| execute::<T>(client, &params))
        .inspect_err(|e| {
            if e.is_invalid_arguments() {
                warn!(tool = T::NAME, "{}", e);
            }
        })
}

/// Create a success result: the body as pretty JSON text, plus structured
/// content when the body is an object.
pub fn success_result(value: Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
    let mut result = CallToolResult::success(vec![Content::text(text)]);
    if value.is_object() {
        result.structured_content = Some(value);
    }
    result
}

/// Create an error result with a formatted message.
pub fn error_result(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

/// Map a tool outcome onto MCP: local argument problems become protocol
/// errors, API failures become tool results flagged `isError`.
pub fn into_call_result(outcome: Result<Value, ToolError>) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(value) => Ok(success_result(value)),
        Err(ToolError::Api(e)) => Ok(error_result(e.to_string())),
        Err(ToolError::InvalidArguments(msg)) => Err(McpError::invalid_params(msg, None)),
        Err(e @ ToolError::NotFound(_)) => Err(McpError::invalid_params(e.to_string(), None)),
    }
}

/// Run a tool call on the blocking thread pool.
pub async fn call_blocking<T: FigmaTool>(
    client: SharedClient,
    arguments: JsonObject,
) -> Result<CallToolResult, McpError> {
    let outcome =
        tokio::task::spawn_blocking(move || invoke::<T>(client.as_ref(), Value::Object(arguments)))
            .await
            .map_err(|e| McpError::internal_error(format!("Tool task failed: {}", e), None))?;

    into_call_result(outcome)
}

/// Create a Tool model for `T` (metadata).
pub fn to_tool<T: FigmaTool>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a ToolRoute for STDIO transport.
pub fn create_route<T, S>(client: SharedClient) -> ToolRoute<S>
where
    T: FigmaTool,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool::<T>(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let client = client.clone();
        async move { call_blocking::<T>(client, args).await }.boxed()
    })
}

/// HTTP handler for `T` (for HTTP transport).
///
/// Blocks on the network call; the HTTP transport runs it on the blocking
/// thread pool.
#[cfg(feature = "http")]
pub fn http_handler<T: FigmaTool>(arguments: Value, client: SharedClient) -> Result<Value, String> {
    let outcome = invoke::<T>(client.as_ref(), arguments);
    let result = into_call_result(outcome).map_err(|e| e.message.to_string())?;
    Ok(call_result_json(result))
}

/// JSON-RPC rendering of a tool result.
#[cfg(feature = "http")]
fn call_result_json(result: CallToolResult) -> Value {
    let mut response = serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    });

    if let (Some(structured), Some(object)) =
        (result.structured_content, response.as_object_mut())
    {
        object.insert("structuredContent".to_string(), structured);
    }

    response
}
