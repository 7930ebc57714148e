//! Comment tools: listing, posting and deleting comments and their emoji
//! reactions.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::core::api::{ApiRequest, QueryParams, RequestBody};
use crate::domains::tools::{FigmaTool, ToolError};

use super::common::{optional_text, path_param, require, text};

/// Parameters addressing one comment.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CommentParams {
    #[schemars(description = "File key containing the comment")]
    pub file_key: String,

    #[schemars(description = "Comment id")]
    #[serde(deserialize_with = "text")]
    pub comment_id: String,
}

fn comment_path(file_key: &str, comment_id: &str) -> Result<String, ToolError> {
    Ok(format!(
        "/v1/files/{}/comments/{}",
        path_param("file_key", file_key)?,
        path_param("comment_id", comment_id)?
    ))
}

// ============================================================================
// Comments
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCommentsParams {
    #[schemars(description = "File key whose comments to list")]
    pub file_key: String,

    #[schemars(description = "Return comment messages as markdown")]
    #[serde(default)]
    pub as_md: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct GetCommentsTool;

impl FigmaTool for GetCommentsTool {
    const NAME: &'static str = "get_comments";
    const DESCRIPTION: &'static str = "List the comments left on a Figma file.";

    type Params = GetCommentsParams;

    fn request(params: &GetCommentsParams) -> Result<ApiRequest, ToolError> {
        let file_key = path_param("file_key", &params.file_key)?;
        let query = QueryParams::new().optional("as_md", params.as_md);
        Ok(ApiRequest::get(format!("/v1/files/{}/comments", file_key)).with_query(query))
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PostCommentParams {
    #[schemars(description = "File key to comment on")]
    pub file_key: String,

    #[schemars(description = "Comment text")]
    pub message: String,

    #[schemars(description = "Id of the root comment to reply to (replies cannot be nested)")]
    #[serde(default, deserialize_with = "optional_text")]
    pub comment_id: Option<String>,

    #[schemars(
        description = "Where to place the comment: a Vector {x, y}, FrameOffset {node_id, node_offset}, Region or FrameOffsetRegion"
    )]
    #[serde(default)]
    pub client_meta: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct PostCommentTool;

impl FigmaTool for PostCommentTool {
    const NAME: &'static str = "post_comment";
    const DESCRIPTION: &'static str = "Post a new comment on a Figma file, or reply to an existing comment. \
         Returns the created comment.";

    type Params = PostCommentParams;

    fn request(params: &PostCommentParams) -> Result<ApiRequest, ToolError> {
        let file_key = path_param("file_key", &params.file_key)?;
        let message = require("message", &params.message)?;

        let body = RequestBody::new()
            .required("message", message)
            .optional("comment_id", params.comment_id.clone())
            .optional("client_meta", params.client_meta.clone());

        Ok(ApiRequest::post(format!("/v1/files/{}/comments", file_key)).with_body(body))
    }
}

#[derive(Debug, Clone)]
pub struct DeleteCommentTool;

impl FigmaTool for DeleteCommentTool {
    const NAME: &'static str = "delete_comment";
    const DESCRIPTION: &'static str =
        "Delete a comment from a Figma file. Only the comment's author can delete it.";

    type Params = CommentParams;

    fn request(params: &CommentParams) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::delete(comment_path(
            &params.file_key,
            &params.comment_id,
        )?))
    }
}

// ============================================================================
// Reactions
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCommentReactionsParams {
    #[schemars(description = "File key containing the comment")]
    pub file_key: String,

    #[schemars(description = "Comment id")]
    #[serde(deserialize_with = "text")]
    pub comment_id: String,

    #[schemars(description = "Pagination cursor from a previous response")]
    #[serde(default, deserialize_with = "optional_text")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetCommentReactionsTool;

impl FigmaTool for GetCommentReactionsTool {
    const NAME: &'static str = "get_comment_reactions";
    const DESCRIPTION: &'static str = "List the emoji reactions on a comment, one page at a time.";

    type Params = GetCommentReactionsParams;

    fn request(params: &GetCommentReactionsParams) -> Result<ApiRequest, ToolError> {
        let path = comment_path(&params.file_key, &params.comment_id)?;
        let query = QueryParams::new().optional("cursor", params.cursor.as_ref());
        Ok(ApiRequest::get(format!("{}/reactions", path)).with_query(query))
    }
}

/// Parameters addressing one reaction on a comment.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CommentReactionParams {
    #[schemars(description = "File key containing the comment")]
    pub file_key: String,

    #[schemars(description = "Comment id")]
    #[serde(deserialize_with = "text")]
    pub comment_id: String,

    #[schemars(description = "Emoji shortcode, e.g. \":heart:\" or \":+1::skin-tone-2:\"")]
    pub emoji: String,
}

#[derive(Debug, Clone)]
pub struct PostCommentReactionTool;

impl FigmaTool for PostCommentReactionTool {
    const NAME: &'static str = "post_comment_reaction";
    const DESCRIPTION: &'static str = "Add an emoji reaction to a comment on a Figma file.";

    type Params = CommentReactionParams;

    fn request(params: &CommentReactionParams) -> Result<ApiRequest, ToolError> {
        let path = comment_path(&params.file_key, &params.comment_id)?;
        let emoji = require("emoji", &params.emoji)?;

        Ok(ApiRequest::post(format!("{}/reactions", path))
            .with_body(RequestBody::new().required("emoji", emoji)))
    }
}

#[derive(Debug, Clone)]
pub struct DeleteCommentReactionTool;

impl FigmaTool for DeleteCommentReactionTool {
    const NAME: &'static str = "delete_comment_reaction";
    const DESCRIPTION: &'static str =
        "Remove the authenticated user's emoji reaction from a comment on a Figma file.";

    type Params = CommentReactionParams;

    fn request(params: &CommentReactionParams) -> Result<ApiRequest, ToolError> {
        let path = comment_path(&params.file_key, &params.comment_id)?;
        let emoji = require("emoji", &params.emoji)?;

        Ok(ApiRequest::delete(format!("{}/reactions", path))
            .with_query(QueryParams::new().required("emoji", emoji)))
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
    fn test_get_comments_as_markdown() {
        let client = MockClient::ok(json!({"comments": []}));

        invoke::<GetCommentsTool>(&client, json!({"file_key": "abc", "as_md": true})).unwrap();

        let call = client.single_call();
        assert_eq!(call.path, "/v1/files/abc/comments");
        assert_eq!(call.query.get("as_md"), Some("true"));
    }

    #[test]
    fn test_post_comment_only_message() {
        let created = json!({"id": "77", "message": "Ship it"});
        let client = MockClient::ok(created.clone());

        let result =
            invoke::<PostCommentTool>(&client, json!({"file_key": "abc", "message": "Ship it"}))
                .unwrap();

        assert_eq!(result, created);
        let call = client.single_call();
        assert_eq!(call.verb, Verb::Post);
        assert_eq!(call.path, "/v1/files/abc/comments");
        assert!(call.query.is_empty());
        assert_eq!(call.body, Some(json!({"message": "Ship it"})));
    }

    #[test]
    fn test_post_comment_reply_with_position() {
        let client = MockClient::ok(json!({}));

        invoke::<PostCommentTool>(
            &client,
            json!({
                "file_key": "abc",
                "message": "Agreed",
                "comment_id": 12,
                "client_meta": {"node_id": "1:2", "node_offset": {"x": 10, "y": 4}}
            }),
        )
        .unwrap();

        assert_eq!(
            client.single_call().body,
            Some(json!({
                "message": "Agreed",
                "comment_id": "12",
                "client_meta": {"node_id": "1:2", "node_offset": {"x": 10, "y": 4}}
            }))
        );
    }

    #[test]
    fn test_post_comment_requires_message() {
        let client = MockClient::ok(json!({}));

        assert!(invoke::<PostCommentTool>(&client, json!({"file_key": "abc"})).is_err());
        assert!(
            invoke::<PostCommentTool>(&client, json!({"file_key": "abc", "message": ""})).is_err()
        );
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn test_delete_comment() {
        let client = MockClient::ok(json!({"status": 200, "error": false}));

        invoke::<DeleteCommentTool>(&client, json!({"file_key": "abc", "comment_id": "77"}))
            .unwrap();

        let call = client.single_call();
        assert_eq!(call.verb, Verb::Delete);
        assert_eq!(call.path, "/v1/files/abc/comments/77");
        assert_eq!(call.body, None);
    }

    #[test]
    fn test_delete_comment_requires_comment_id() {
        let client = MockClient::ok(json!({}));
        let err = invoke::<DeleteCommentTool>(&client, json!({"file_key": "abc"})).unwrap_err();
        assert!(err.to_string().contains("comment_id"));
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn test_get_comment_reactions_cursor() {
        let client = MockClient::ok(json!({"reactions": [], "pagination": {}}));

        invoke::<GetCommentReactionsTool>(
            &client,
            json!({"file_key": "abc", "comment_id": "77", "cursor": "next-page"}),
        )
        .unwrap();

        let call = client.single_call();
        assert_eq!(call.path, "/v1/files/abc/comments/77/reactions");
        assert_eq!(call.query.get("cursor"), Some("next-page"));
    }

    #[test]
    fn test_get_comment_reactions_numeric_ids() {
        let client = MockClient::ok(json!({"reactions": [], "pagination": {}}));

        invoke::<GetCommentReactionsTool>(
            &client,
            json!({"file_key": "abc", "comment_id": 1, "cursor": 12345}),
        )
        .unwrap();

        let call = client.single_call();
        assert_eq!(call.path, "/v1/files/abc/comments/1/reactions");
        assert_eq!(call.query.get("cursor"), Some("12345"));
    }

    #[test]
    fn test_delete_comment_rejects_dot_segment_id() {
        let client = MockClient::ok(json!({}));
        let err =
            invoke::<DeleteCommentTool>(&client, json!({"file_key": "abc", "comment_id": ".."}))
                .unwrap_err();
        assert!(err.is_invalid_arguments());
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn test_post_reaction_sends_emoji_in_body() {
        let client = MockClient::ok(json!({"status": 200, "error": false}));

        invoke::<PostCommentReactionTool>(
            &client,
            json!({"file_key": "abc", "comment_id": "77", "emoji": ":heart:"}),
        )
        .unwrap();

        let call = client.single_call();
        assert_eq!(call.verb, Verb::Post);
        assert_eq!(call.path, "/v1/files/abc/comments/77/reactions");
        assert_eq!(call.body, Some(json!({"emoji": ":heart:"})));
        assert!(call.query.is_empty());
    }

    #[test]
    fn test_delete_reaction_sends_emoji_in_query() {
        let client = MockClient::ok(json!({"status": 200, "error": false}));

        invoke::<DeleteCommentReactionTool>(
            &client,
            json!({"file_key": "abc", "comment_id": "77", "emoji": ":heart:"}),
        )
        .unwrap();

        let call = client.single_call();
        assert_eq!(call.verb, Verb::Delete);
        assert_eq!(call.query.get("emoji"), Some(":heart:"));
        assert_eq!(call.body, None);
    }

    #[test]
    fn test_reaction_requires_emoji() {
        let client = MockClient::ok(json!({}));
        let err = invoke::<DeleteCommentReactionTool>(
            &client,
            json!({"file_key": "abc", "comment_id": "77"}),
        )
        .unwrap_err();
        assert!(err.is_invalid_arguments());
        assert_eq!(client.call_count(), 0);
    }
}
