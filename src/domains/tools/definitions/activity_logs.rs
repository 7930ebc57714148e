//! Organization activity log tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::{ApiRequest, QueryParams};
use crate::domains::tools::{FigmaTool, ToolError};

use super::common::{optional_id_list, optional_text};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetActivityLogsParams {
    #[schemars(description = "Event types to include, comma-separated or an array (default: all)")]
    #[serde(default, deserialize_with = "optional_id_list")]
    pub events: Option<String>,

    /// Sent exactly as given; the endpoint documents Unix seconds.
    #[schemars(description = "Start of the time range, in Unix seconds")]
    #[serde(default, deserialize_with = "optional_text")]
    pub start_time: Option<String>,

    #[schemars(description = "End of the time range, in Unix seconds")]
    #[serde(default, deserialize_with = "optional_text")]
    pub end_time: Option<String>,

    #[schemars(description = "Maximum number of events to return")]
    #[serde(default)]
    pub limit: Option<u32>,

    #[schemars(description = "Sort order by timestamp: asc or desc")]
    #[serde(default)]
    pub order: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetActivityLogsTool;

impl FigmaTool for GetActivityLogsTool {
    const NAME: &'static str = "get_activity_logs";
    const DESCRIPTION: &'static str = "List activity log events for the organization \
         (requires an organization admin token with the org:activity_log_read scope).";

    type Params = GetActivityLogsParams;

    fn request(params: &GetActivityLogsParams) -> Result<ApiRequest, ToolError> {
        let query = QueryParams::new()
            .optional("events", params.events.as_ref())
            .optional("start_time", params.start_time.as_ref())
            .optional("end_time", params.end_time.as_ref())
            .optional("limit", params.limit)
            .optional("order", params.order.as_ref());

        Ok(ApiRequest::get("/v1/activity_logs").with_query(query))
    }
}
