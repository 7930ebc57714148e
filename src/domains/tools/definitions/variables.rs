//! Variable tools (Enterprise plans).
//!
//! Bulk variable changes are passed to Figma as given; the change arrays use
//! the API's camelCase keys.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::core::api::{ApiRequest, RequestBody};
use crate::domains::tools::{FigmaTool, ToolError};

use super::common::{FileKeyParams, path_param};

#[derive(Debug, Clone)]
pub struct GetLocalVariablesTool;

impl FigmaTool for GetLocalVariablesTool {
    const NAME: &'static str = "get_local_variables";
    const DESCRIPTION: &'static str =
        "List the local variables and variable collections created in a file, \
         plus remote variables used in it.";

    type Params = FileKeyParams;

    fn request(params: &FileKeyParams) -> Result<ApiRequest, ToolError> {
        let file_key = path_param("file_key", &params.file_key)?;
        Ok(ApiRequest::get(format!("/v1/files/{}/variables/local", file_key)))
    }
}

#[derive(Debug, Clone)]
pub struct GetPublishedVariablesTool;

impl FigmaTool for GetPublishedVariablesTool {
    const NAME: &'static str = "get_published_variables";
    const DESCRIPTION: &'static str =
        "List the variables and variable collections published from a library file.";

    type Params = FileKeyParams;

    fn request(params: &FileKeyParams) -> Result<ApiRequest, ToolError> {
        let file_key = path_param("file_key", &params.file_key)?;
        Ok(ApiRequest::get(format!(
            "/v1/files/{}/variables/published",
            file_key
        )))
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PostVariablesParams {
    #[schemars(description = "File key to modify")]
    pub file_key: String,

    #[schemars(description = "Variable collection changes: CREATE, UPDATE or DELETE actions")]
    #[serde(default, rename = "variableCollections")]
    pub variable_collections: Option<Value>,

    #[schemars(description = "Variable mode changes")]
    #[serde(default, rename = "variableModes")]
    pub variable_modes: Option<Value>,

    #[schemars(description = "Variable changes")]
    #[serde(default)]
    pub variables: Option<Value>,

    #[schemars(description = "Values to set per variable and mode")]
    #[serde(default, rename = "variableModeValues")]
    pub variable_mode_values: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct PostVariablesTool;

impl FigmaTool for PostVariablesTool {
    const NAME: &'static str = "post_variables";
    const DESCRIPTION: &'static str = "Create, update or delete variables, collections, modes \
         and mode values in a file, in one atomic batch.";

    type Params = PostVariablesParams;

    fn request(params: &PostVariablesParams) -> Result<ApiRequest, ToolError> {
        let file_key = path_param("file_key", &params.file_key)?;

        // `Option<Value>` is None for both a missing key and an explicit null.
        let body = RequestBody::new()
            .optional("variableCollections", params.variable_collections.clone())
            .optional("variableModes", params.variable_modes.clone())
            .optional("variables", params.variables.clone())
            .optional("variableModeValues", params.variable_mode_values.clone());

        Ok(ApiRequest::post(format!("/v1/files/{}/variables", file_key)).with_body(body))
    }
}
