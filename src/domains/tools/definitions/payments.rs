//! Plugin and widget payment lookup.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::{ApiRequest, QueryParams};
use crate::domains::tools::{FigmaTool, ToolError};

use super::common::optional_text;

/// Identify the payer either by `plugin_payment_token`, or by `user_id`
/// together with one of `community_file_id`, `plugin_id` or `widget_id`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPaymentsParams {
    #[schemars(description = "Short-lived token from getPluginPaymentTokenAsync in the plugin")]
    #[serde(default)]
    pub plugin_payment_token: Option<String>,

    #[schemars(description = "User whose payment information to look up")]
    #[serde(default, deserialize_with = "optional_text")]
    pub user_id: Option<String>,

    #[schemars(description = "Community file id the payment was made for")]
    #[serde(default, deserialize_with = "optional_text")]
    pub community_file_id: Option<String>,

    #[schemars(description = "Plugin id the payment was made for")]
    #[serde(default, deserialize_with = "optional_text")]
    pub plugin_id: Option<String>,

    #[schemars(description = "Widget id the payment was made for")]
    #[serde(default, deserialize_with = "optional_text")]
    pub widget_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetPaymentsTool;

impl FigmaTool for GetPaymentsTool {
    const NAME: &'static str = "get_payments";
    const DESCRIPTION: &'static str =
        "Get a user's payment information for a plugin, widget or Community file.";

    type Params = GetPaymentsParams;

    fn request(params: &GetPaymentsParams) -> Result<ApiRequest, ToolError> {
        let query = QueryParams::new()
            .optional("plugin_payment_token", params.plugin_payment_token.as_ref())
            .optional("user_id", params.user_id.as_ref())
            .optional("community_file_id", params.community_file_id.as_ref())
            .optional("plugin_id", params.plugin_id.as_ref())
            .optional("widget_id", params.widget_id.as_ref());

        Ok(ApiRequest::get("/v1/payments").with_query(query))
    }
}
