//! Webhook tools.
//!
//! Webhooks live under the v2 API. Registering or updating one requires the
//! passcode Figma echoes back in every delivery; `status` and `description`
//! are optional.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::{ApiRequest, RequestBody};
use crate::domains::tools::{FigmaTool, ToolError};

use super::common::{TeamIdParams, path_param, require, text};

/// Parameters addressing one webhook.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WebhookIdParams {
    #[schemars(description = "Webhook id")]
    #[serde(deserialize_with = "text")]
    pub webhook_id: String,
}

fn webhook_path(webhook_id: &str) -> Result<String, ToolError> {
    Ok(format!("/v2/webhooks/{}", path_param("webhook_id", webhook_id)?))
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PostWebhookParams {
    #[schemars(
        description = "Event that triggers the webhook: PING, FILE_UPDATE, FILE_VERSION_UPDATE, FILE_DELETE, LIBRARY_PUBLISH, FILE_COMMENT or DEV_MODE_STATUS_UPDATE"
    )]
    pub event_type: String,

    #[schemars(description = "Team the webhook is attached to")]
    pub team_id: String,

    #[schemars(description = "URL the webhook payloads are sent to")]
    pub endpoint: String,

    #[schemars(description = "Secret echoed back in every payload to verify its origin")]
    pub passcode: String,

    #[schemars(description = "ACTIVE or PAUSED (defaults to ACTIVE)")]
    #[serde(default)]
    pub status: Option<String>,

    #[schemars(description = "Human-readable description of the webhook")]
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PostWebhookTool;

impl FigmaTool for PostWebhookTool {
    const NAME: &'static str = "post_webhook";
    const DESCRIPTION: &'static str =
        "Register a webhook that calls an endpoint when an event occurs in a team. \
         Returns the created webhook.";

    type Params = PostWebhookParams;

    fn request(params: &PostWebhookParams) -> Result<ApiRequest, ToolError> {
        let body = RequestBody::new()
            .required("event_type", require("event_type", &params.event_type)?)
            .required("team_id", require("team_id", &params.team_id)?)
            .required("endpoint", require("endpoint", &params.endpoint)?)
            .required("passcode", require("passcode", &params.passcode)?)
            .optional("status", params.status.clone())
            .optional("description", params.description.clone());

        Ok(ApiRequest::post("/v2/webhooks").with_body(body))
    }
}

#[derive(Debug, Clone)]
pub struct GetWebhookTool;

impl FigmaTool for GetWebhookTool {
    const NAME: &'static str = "get_webhook";
    const DESCRIPTION: &'static str = "Get a webhook by id.";

    type Params = WebhookIdParams;

    fn request(params: &WebhookIdParams) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::get(webhook_path(&params.webhook_id)?))
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PutWebhookParams {
    #[schemars(description = "Webhook id")]
    #[serde(deserialize_with = "text")]
    pub webhook_id: String,

    #[schemars(description = "Event that triggers the webhook")]
    pub event_type: String,

    #[schemars(description = "URL the webhook payloads are sent to")]
    pub endpoint: String,

    #[schemars(description = "Secret echoed back in every payload to verify its origin")]
    pub passcode: String,

    #[schemars(description = "ACTIVE or PAUSED")]
    #[serde(default)]
    pub status: Option<String>,

    #[schemars(description = "Human-readable description of the webhook")]
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PutWebhookTool;

impl FigmaTool for PutWebhookTool {
    const NAME: &'static str = "put_webhook";
    const DESCRIPTION: &'static str = "Update an existing webhook. Returns the updated webhook.";

    type Params = PutWebhookParams;

    fn request(params: &PutWebhookParams) -> Result<ApiRequest, ToolError> {
        let path = webhook_path(&params.webhook_id)?;
        let body = RequestBody::new()
            .required("event_type", require("event_type", &params.event_type)?)
            .required("endpoint", require("endpoint", &params.endpoint)?)
            .required("passcode", require("passcode", &params.passcode)?)
            .optional("status", params.status.clone())
            .optional("description", params.description.clone());

        Ok(ApiRequest::put(path).with_body(body))
    }
}

#[derive(Debug, Clone)]
pub struct DeleteWebhookTool;

impl FigmaTool for DeleteWebhookTool {
    const NAME: &'static str = "delete_webhook";
    const DESCRIPTION: &'static str = "Delete a webhook. Returns the deleted webhook.";

    type Params = WebhookIdParams;

    fn request(params: &WebhookIdParams) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::delete(webhook_path(&params.webhook_id)?))
    }
}

#[derive(Debug, Clone)]
pub struct GetTeamWebhooksTool;

impl FigmaTool for GetTeamWebhooksTool {
    const NAME: &'static str = "get_team_webhooks";
    const DESCRIPTION: &'static str = "List the webhooks registered for a team.";

    type Params = TeamIdParams;

    fn request(params: &TeamIdParams) -> Result<ApiRequest, ToolError> {
        let team_id = path_param("team_id", &params.team_id)?;
        Ok(ApiRequest::get(format!("/v2/teams/{}/webhooks", team_id)))
    }
}

#[derive(Debug, Clone)]
pub struct GetWebhookRequestsTool;

impl FigmaTool for GetWebhookRequestsTool {
    const NAME: &'static str = "get_webhook_requests";
    const DESCRIPTION: &'static str =
        "List the deliveries sent by a webhook in the last week, for debugging.";

    type Params = WebhookIdParams;

    fn request(params: &WebhookIdParams) -> Result<ApiRequest, ToolError> {
        let path = webhook_path(&params.webhook_id)?;
        Ok(ApiRequest::get(format!("{}/requests", path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::Verb;
    use crate::core::api::mock::MockClient;
    use crate::domains::tools::invoke;
    use serde_json::json;

    fn registration() -> serde_json::Value {
        json!({
            "event_type": "FILE_UPDATE",
            "team_id": "42",
            "endpoint": "https://hooks.example.com/figma",
            "passcode": "s3cret"
        })
    }

    #[test]
    fn test_post_webhook_required_only() {
        let client = MockClient::ok(json!({"id": "9", "status": "ACTIVE"}));

        let result = invoke::<PostWebhookTool>(&client, registration()).unwrap();

        assert_eq!(result["id"], "9");
        let call = client.single_call();
        assert_eq!(call.verb, Verb::Post);
        assert_eq!(call.path, "/v2/webhooks");
        assert!(call.query.is_empty());
        assert_eq!(call.body, Some(registration()));
    }

    #[test]
    fn test_post_webhook_optional_fields() {
        let client = MockClient::ok(json!({}));
        let mut args = registration();
        args["status"] = json!("PAUSED");
        args["description"] = json!("Design sync");

        invoke::<PostWebhookTool>(&client, args).unwrap();

        let body = client.single_call().body.unwrap();
        assert_eq!(body["status"], "PAUSED");
        assert_eq!(body["description"], "Design sync");
    }

    #[test]
    fn test_post_webhook_requires_passcode() {
        let client = MockClient::ok(json!({}));
        let mut args = registration();
        args.as_object_mut().unwrap().remove("passcode");

        let err = invoke::<PostWebhookTool>(&client, args).unwrap_err();

        assert!(err.is_invalid_arguments());
        assert!(err.to_string().contains("passcode"));
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn test_post_webhook_rejects_blank_endpoint() {
        let client = MockClient::ok(json!({}));
        let mut args = registration();
        args["endpoint"] = json!(" ");

        let err = invoke::<PostWebhookTool>(&client, args).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid arguments: Missing required parameter 'endpoint'"
        );
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn test_put_webhook() {
        let client = MockClient::ok(json!({}));

        invoke::<PutWebhookTool>(
            &client,
            json!({
                "webhook_id": 9,
                "event_type": "FILE_COMMENT",
                "endpoint": "https://hooks.example.com/figma",
                "passcode": "s3cret",
                "status": "ACTIVE"
            }),
        )
        .unwrap();

        let call = client.single_call();
        assert_eq!(call.verb, Verb::Put);
        assert_eq!(call.path, "/v2/webhooks/9");
        assert_eq!(
            call.body,
            Some(json!({
                "event_type": "FILE_COMMENT",
                "endpoint": "https://hooks.example.com/figma",
                "passcode": "s3cret",
                "status": "ACTIVE"
            }))
        );
    }

    #[test]
    fn test_webhook_lookups() {
        let client = MockClient::ok(json!({}));

        invoke::<GetWebhookTool>(&client, json!({"webhook_id": "9"})).unwrap();
        invoke::<GetWebhookRequestsTool>(&client, json!({"webhook_id": "9"})).unwrap();
        invoke::<GetTeamWebhooksTool>(&client, json!({"team_id": "42"})).unwrap();
        invoke::<DeleteWebhookTool>(&client, json!({"webhook_id": "9"})).unwrap();

        let calls = client.calls();
        let targets: Vec<_> = calls.iter().map(|c| (c.verb, c.path.as_str())).collect();
        assert_eq!(
            targets,
            vec![
                (Verb::Get, "/v2/webhooks/9"),
                (Verb::Get, "/v2/webhooks/9/requests"),
                (Verb::Get, "/v2/teams/42/webhooks"),
                (Verb::Delete, "/v2/webhooks/9"),
            ]
        );
        assert!(calls.iter().all(|c| c.body.is_none()));
    }

    #[test]
    fn test_webhook_id_required() {
        let client = MockClient::ok(json!({}));
        assert!(invoke::<GetWebhookTool>(&client, json!({})).is_err());
        assert!(invoke::<DeleteWebhookTool>(&client, json!({"webhook_id": null})).is_err());
        assert_eq!(client.call_count(), 0);
    }
}
