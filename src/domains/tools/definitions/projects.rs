//! Project tools: team project listings and project file listings.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::{ApiRequest, QueryParams};
use crate::domains::tools::{FigmaTool, ToolError};

use super::common::{TeamIdParams, path_param, text};

#[derive(Debug, Clone)]
pub struct GetTeamProjectsTool;

impl FigmaTool for GetTeamProjectsTool {
    const NAME: &'static str = "get_team_projects";
    const DESCRIPTION: &'static str =
        "List the projects of a Figma team that the authenticated user can access.";

    type Params = TeamIdParams;

    fn request(params: &TeamIdParams) -> Result<ApiRequest, ToolError> {
        let team_id = path_param("team_id", &params.team_id)?;
        Ok(ApiRequest::get(format!("/v1/teams/{}/projects", team_id)))
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetProjectFilesParams {
    #[schemars(description = "Project id whose files to list")]
    #[serde(deserialize_with = "text")]
    pub project_id: String,

    #[schemars(description = "Include branch metadata for each main file")]
    #[serde(default)]
    pub branch_data: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct GetProjectFilesTool;

impl FigmaTool for GetProjectFilesTool {
    const NAME: &'static str = "get_project_files";
    const DESCRIPTION: &'static str =
        "List the files in a Figma project, optionally with branch metadata.";

    type Params = GetProjectFilesParams;

    fn request(params: &GetProjectFilesParams) -> Result<ApiRequest, ToolError> {
        let project_id = path_param("project_id", &params.project_id)?;
        let query = QueryParams::new().optional("branch_data", params.branch_data);
        Ok(ApiRequest::get(format!("/v1/projects/{}/files", project_id)).with_query(query))
    }
}
