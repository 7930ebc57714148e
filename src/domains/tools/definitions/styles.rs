//! Style library tools.

use crate::core::api::ApiRequest;
use crate::domains::tools::{FigmaTool, ToolError};

use super::common::{FileKeyParams, KeyParams, TeamPageParams, path_param};

#[derive(Debug, Clone)]
pub struct GetTeamStylesTool;

impl FigmaTool for GetTeamStylesTool {
    const NAME: &'static str = "get_team_styles";
    const DESCRIPTION: &'static str = "List the published styles in a team library, one page at a time.";

    type Params = TeamPageParams;

    fn request(params: &TeamPageParams) -> Result<ApiRequest, ToolError> {
        let team_id = path_param("team_id", &params.team_id)?;
        Ok(ApiRequest::get(format!("/v1/teams/{}/styles", team_id)).with_query(params.query()))
    }
}

#[derive(Debug, Clone)]
pub struct GetFileStylesTool;

impl FigmaTool for GetFileStylesTool {
    const NAME: &'static str = "get_file_styles";
    const DESCRIPTION: &'static str = "List the published styles in a Figma library file.";

    type Params = FileKeyParams;

    fn request(params: &FileKeyParams) -> Result<ApiRequest, ToolError> {
        let file_key = path_param("file_key", &params.file_key)?;
        Ok(ApiRequest::get(format!("/v1/files/{}/styles", file_key)))
    }
}

#[derive(Debug, Clone)]
pub struct GetStyleTool;

impl FigmaTool for GetStyleTool {
    const NAME: &'static str = "get_style";
    const DESCRIPTION: &'static str = "Get the metadata of a published style by its key.";

    type Params = KeyParams;

    fn request(params: &KeyParams) -> Result<ApiRequest, ToolError> {
        let key = path_param("key", &params.key)?;
        Ok(ApiRequest::get(format!("/v1/styles/{}", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::mock::MockClient;
    use crate::domains::tools::invoke;
    use serde_json::json;

    #[test]
    fn test_team_styles_before_cursor() {
        let client = MockClient::ok(json!({"meta": {"styles": []}}));

        invoke::<GetTeamStylesTool>(&client, json!({"team_id": "42", "before": "900"})).unwrap();

        let call = client.single_call();
        assert_eq!(call.path, "/v1/teams/42/styles");
        assert_eq!(call.query.len(), 1);
        assert_eq!(call.query.get("before"), Some("900"));
    }

    #[test]
    fn test_file_styles_and_style_lookup() {
        let client = MockClient::ok(json!({}));

        invoke::<GetFileStylesTool>(&client, json!({"file_key": "lib"})).unwrap();
        invoke::<GetStyleTool>(&client, json!({"key": "s1"})).unwrap();

        let paths: Vec<_> = client.calls().into_iter().map(|c| c.path).collect();
        assert_eq!(paths, vec!["/v1/files/lib/styles", "/v1/styles/s1"]);
    }

    #[test]
    fn test_style_lookup_failure_propagates() {
        let client = MockClient::status(404, r#"{"status":404,"error":true}"#);
        let err = invoke::<GetStyleTool>(&client, json!({"key": "gone"})).unwrap_err();
        assert!(!err.is_invalid_arguments());
        assert_eq!(client.call_count(), 1);
    }
}
