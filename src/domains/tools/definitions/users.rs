//! User tools.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::ApiRequest;
use crate::domains::tools::{FigmaTool, ToolError};

/// `get_me` takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetMeParams {}

#[derive(Debug, Clone)]
pub struct GetMeTool;

impl FigmaTool for GetMeTool {
    const NAME: &'static str = "get_me";
    const DESCRIPTION: &'static str =
        "Get the user the server is authenticated as: id, handle, email and avatar URL.";

    type Params = GetMeParams;

    fn request(_params: &GetMeParams) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::get("/v1/me"))
    }
}
