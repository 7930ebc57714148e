//! Component library tools: components and component sets, listed per team
//! or per file, or looked up by key.

use crate::core::api::ApiRequest;
use crate::domains::tools::{FigmaTool, ToolError};

use super::common::{FileKeyParams, KeyParams, TeamPageParams, path_param};

#[derive(Debug, Clone)]
pub struct GetTeamComponentsTool;

impl FigmaTool for GetTeamComponentsTool {
    const NAME: &'static str = "get_team_components";
    const DESCRIPTION: &'static str = "List the published components in a team library, one page at a time.";

    type Params = TeamPageParams;

    fn request(params: &TeamPageParams) -> Result<ApiRequest, ToolError> {
        let team_id = path_param("team_id", &params.team_id)?;
        Ok(ApiRequest::get(format!("/v1/teams/{}/components", team_id)).with_query(params.query()))
    }
}

#[derive(Debug, Clone)]
pub struct GetFileComponentsTool;

impl FigmaTool for GetFileComponentsTool {
    const NAME: &'static str = "get_file_components";
    const DESCRIPTION: &'static str = "List the published components in a Figma library file.";

    type Params = FileKeyParams;

    fn request(params: &FileKeyParams) -> Result<ApiRequest, ToolError> {
        let file_key = path_param("file_key", &params.file_key)?;
        Ok(ApiRequest::get(format!("/v1/files/{}/components", file_key)))
    }
}

#[derive(Debug, Clone)]
pub struct GetComponentTool;

impl FigmaTool for GetComponentTool {
    const NAME: &'static str = "get_component";
    const DESCRIPTION: &'static str = "Get the metadata of a published component by its key.";

    type Params = KeyParams;

    fn request(params: &KeyParams) -> Result<ApiRequest, ToolError> {
        let key = path_param("key", &params.key)?;
        Ok(ApiRequest::get(format!("/v1/components/{}", key)))
    }
}

#[derive(Debug, Clone)]
pub struct GetTeamComponentSetsTool;

impl FigmaTool for GetTeamComponentSetsTool {
    const NAME: &'static str = "get_team_component_sets";
    const DESCRIPTION: &'static str =
        "List the published component sets in a team library, one page at a time.";

    type Params = TeamPageParams;

    fn request(params: &TeamPageParams) -> Result<ApiRequest, ToolError> {
        let team_id = path_param("team_id", &params.team_id)?;
        Ok(ApiRequest::get(format!("/v1/teams/{}/component_sets", team_id))
            .with_query(params.query()))
    }
}

#[derive(Debug, Clone)]
pub struct GetFileComponentSetsTool;

impl FigmaTool for GetFileComponentSetsTool {
    const NAME: &'static str = "get_file_component_sets";
    const DESCRIPTION: &'static str = "List the published component sets in a Figma library file.";

    type Params = FileKeyParams;

    fn request(params: &FileKeyParams) -> Result<ApiRequest, ToolError> {
        let file_key = path_param("file_key", &params.file_key)?;
        Ok(ApiRequest::get(format!("/v1/files/{}/component_sets", file_key)))
    }
}

#[derive(Debug, Clone)]
pub struct GetComponentSetTool;

impl FigmaTool for GetComponentSetTool {
    const NAME: &'static str = "get_component_set";
    const DESCRIPTION: &'static str = "Get the metadata of a published component set by its key.";

    type Params = KeyParams;

    fn request(params: &KeyParams) -> Result<ApiRequest, ToolError> {
        let key = path_param("key", &params.key)?;
        Ok(ApiRequest::get(format!("/v1/component_sets/{}", key)))
    }
}
