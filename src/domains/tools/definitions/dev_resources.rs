//! Dev resource tools: links attached to nodes in Dev Mode.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::core::api::{ApiRequest, QueryParams, RequestBody};
use crate::domains::tools::{FigmaTool, ToolError};

use super::common::{optional_id_list, path_param, text};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetDevResourcesParams {
    #[schemars(description = "File key whose dev resources to list")]
    pub file_key: String,

    #[schemars(description = "Only return resources attached to these node ids (comma-separated or an array)")]
    #[serde(default, deserialize_with = "optional_id_list")]
    pub node_ids: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetDevResourcesTool;

impl FigmaTool for GetDevResourcesTool {
    const NAME: &'static str = "get_dev_resources";
    const DESCRIPTION: &'static str = "List the dev resources attached to nodes in a file.";

    type Params = GetDevResourcesParams;

    fn request(params: &GetDevResourcesParams) -> Result<ApiRequest, ToolError> {
        let file_key = path_param("file_key", &params.file_key)?;
        let query = QueryParams::new().optional("node_ids", params.node_ids.as_ref());
        Ok(ApiRequest::get(format!("/v1/files/{}/dev_resources", file_key)).with_query(query))
    }
}

/// Batch payload shared by create and update.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DevResourcesParams {
    #[schemars(
        description = "Array of dev resources. Create: {name, url, file_key, node_id}. Update: {id, name?, url?}"
    )]
    pub dev_resources: Value,
}

impl DevResourcesParams {
    fn body(&self) -> Result<RequestBody, ToolError> {
        if self.dev_resources.is_null() {
            return Err(ToolError::missing_parameter("dev_resources"));
        }
        Ok(RequestBody::new().required("dev_resources", self.dev_resources.clone()))
    }
}

#[derive(Debug, Clone)]
pub struct PostDevResourcesTool;

impl FigmaTool for PostDevResourcesTool {
    const NAME: &'static str = "post_dev_resources";
    const DESCRIPTION: &'static str = "Attach dev resources to nodes, possibly across several files. \
         Returns the created resources and any per-item errors.";

    type Params = DevResourcesParams;

    fn request(params: &DevResourcesParams) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::post("/v1/dev_resources").with_body(params.body()?))
    }
}

#[derive(Debug, Clone)]
pub struct PutDevResourcesTool;

impl FigmaTool for PutDevResourcesTool {
    const NAME: &'static str = "put_dev_resources";
    const DESCRIPTION: &'static str =
        "Update the name or URL of existing dev resources. Returns the updated ids and any per-item errors.";

    type Params = DevResourcesParams;

    fn request(params: &DevResourcesParams) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::put("/v1/dev_resources").with_body(params.body()?))
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteDevResourceParams {
    #[schemars(description = "File key the dev resource belongs to")]
    pub file_key: String,

    #[schemars(description = "Id of the dev resource to delete")]
    #[serde(deserialize_with = "text")]
    pub dev_resource_id: String,
}

#[derive(Debug, Clone)]
pub struct DeleteDevResourceTool;

impl FigmaTool for DeleteDevResourceTool {
    const NAME: &'static str = "delete_dev_resource";
    const DESCRIPTION: &'static str = "Delete a dev resource from a file.";

    type Params = DeleteDevResourceParams;

    fn request(params: &DeleteDevResourceParams) -> Result<ApiRequest, ToolError> {
        let file_key = path_param("file_key", &params.file_key)?;
        let id = path_param("dev_resource_id", &params.dev_resource_id)?;
        Ok(ApiRequest::delete(format!(
            "/v1/files/{}/dev_resources/{}",
            file_key, id
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::Verb;
    use crate::core::api::mock::MockClient;
    use crate::domains::tools::invoke;
    use serde_json::json;

    #[test]
    fn test_get_dev_resources_node_filter() {
        let client = MockClient::ok(json!({"dev_resources": []}));

        invoke::<GetDevResourcesTool>(&client, json!({"file_key": "abc"})).unwrap();
        invoke::<GetDevResourcesTool>(
            &client,
            json!({"file_key": "abc", "node_ids": ["1:2", "3:4"]}),
        )
        .unwrap();

        let calls = client.calls();
        assert_eq!(calls[0].path, "/v1/files/abc/dev_resources");
        assert!(calls[0].query.is_empty());
        assert_eq!(calls[1].query.get("node_ids"), Some("1:2,3:4"));
    }

    #[test]
    fn test_create_and_update_send_batch_verbatim() {
        let resources = json!([
            {"name": "Storybook", "url": "https://sb.example.com", "file_key": "abc", "node_id": "1:2"}
        ]);
        let client = MockClient::ok(json!({"links_created": [], "errors": []}));

        invoke::<PostDevResourcesTool>(&client, json!({"dev_resources": resources})).unwrap();
        invoke::<PutDevResourcesTool>(&client, json!({"dev_resources": resources})).unwrap();

        let calls = client.calls();
        assert_eq!(calls[0].verb, Verb::Post);
        assert_eq!(calls[1].verb, Verb::Put);
        for call in &calls {
            assert_eq!(call.path, "/v1/dev_resources");
            assert_eq!(call.body, Some(json!({"dev_resources": resources})));
        }
    }

    #[test]
    fn test_dev_resources_required() {
        let client = MockClient::ok(json!({}));

        assert!(invoke::<PostDevResourcesTool>(&client, json!({})).is_err());
        let err =
            invoke::<PutDevResourcesTool>(&client, json!({"dev_resources": null})).unwrap_err();

        assert!(err.is_invalid_arguments());
        assert!(err.to_string().contains("dev_resources"));
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn test_delete_dev_resource() {
        let client = MockClient::ok(serde_json::Value::Null);

        let result = invoke::<DeleteDevResourceTool>(
            &client,
            json!({"file_key": "abc", "dev_resource_id": "r-1"}),
        )
        .unwrap();

        assert!(result.is_null());
        let call = client.single_call();
        assert_eq!(call.verb, Verb::Delete);
        assert_eq!(call.path, "/v1/files/abc/dev_resources/r-1");
    }

    #[test]
    fn test_delete_dev_resource_numeric_id() {
        let client = MockClient::ok(serde_json::Value::Null);

        invoke::<DeleteDevResourceTool>(&client, json!({"file_key": "abc", "dev_resource_id": 42}))
            .unwrap();

        assert_eq!(client.single_call().path, "/v1/files/abc/dev_resources/42");
    }
}
