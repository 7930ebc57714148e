//! Common utilities shared across Figma tools.
//!
//! Parameter validation and lenient deserializers for the loosely-typed
//! values agents tend to send (numeric ids as numbers, id lists as arrays).

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer};

use crate::core::api::QueryParams;
use crate::domains::tools::ToolError;

/// Characters that would change which endpoint a path addresses, either
/// directly or once percent-decoded by the server.
const PATH_RESERVED: [char; 4] = ['/', '?', '#', '%'];

/// Check that a required parameter is present and not blank.
pub fn require<'a>(name: &str, value: &'a str) -> Result<&'a str, ToolError> {
    if value.trim().is_empty() {
        return Err(ToolError::missing_parameter(name));
    }
    Ok(value)
}

/// Check a required parameter that is substituted into the request path.
pub fn path_param<'a>(name: &str, value: &'a str) -> Result<&'a str, ToolError> {
    let value = require(name, value)?;
    if value.contains(PATH_RESERVED) {
        return Err(ToolError::invalid_arguments(format!(
            "Parameter '{}' must not contain '/', '?', '#' or '%'",
            name
        )));
    }
    // A bare dot segment is resolved away by URL normalization.
    if value == "." || value == ".." {
        return Err(ToolError::invalid_arguments(format!(
            "Parameter '{}' must not be a dot segment",
            name
        )));
    }
    Ok(value)
}

/// A string, or a number the caller sent unquoted.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextLike {
    Text(String),
    Number(serde_json::Number),
}

impl TextLike {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

/// One id, or a list of ids.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdList {
    One(TextLike),
    Many(Vec<TextLike>),
}

impl IdList {
    fn into_joined(self) -> String {
        match self {
            Self::One(id) => id.into_string(),
            Self::Many(ids) => ids
                .into_iter()
                .map(TextLike::into_string)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// Deserialize a string that may arrive as a JSON number.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(TextLike::deserialize(deserializer)?.into_string())
}

/// Deserialize an optional string that may arrive as a JSON number.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TextLike>::deserialize(deserializer)?.map(TextLike::into_string))
}

/// Deserialize a comma-separated id list given as a string or an array.
pub fn id_list<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(IdList::deserialize(deserializer)?.into_joined())
}

/// Optional variant of [`id_list`].
pub fn optional_id_list<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<IdList>::deserialize(deserializer)?.map(IdList::into_joined))
}

// ============================================================================
// Shared parameter shapes
// ============================================================================

/// Parameters for tools addressed by a file key alone.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FileKeyParams {
    /// File to operate on.
    #[schemars(description = "File key (the id in the file URL: figma.com/file/<file_key>/...)")]
    pub file_key: String,
}

/// Parameters for tools addressed by a team id alone.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TeamIdParams {
    #[schemars(description = "Team id (the id in the team URL: figma.com/files/team/<team_id>/...)")]
    #[serde(deserialize_with = "text")]
    pub team_id: String,
}

/// Parameters for tools addressed by a published component or style key.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct KeyParams {
    #[schemars(description = "Unique key of the published item")]
    pub key: String,
}

/// Parameters for cursor-paginated team library listings.
///
/// Cursors are passed through as given; pages are never followed.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TeamPageParams {
    #[schemars(description = "Team id")]
    #[serde(deserialize_with = "text")]
    pub team_id: String,

    #[schemars(description = "Number of items per page")]
    #[serde(default)]
    pub page_size: Option<u32>,

    #[schemars(description = "Cursor: return items after this id")]
    #[serde(default, deserialize_with = "optional_text")]
    pub after: Option<String>,

    #[schemars(description = "Cursor: return items before this id")]
    #[serde(default, deserialize_with = "optional_text")]
    pub before: Option<String>,
}

impl TeamPageParams {
    /// The pagination query.
    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .optional("page_size", self.page_size)
            .optional("after", self.after.as_ref())
            .optional("before", self.before.as_ref())
    }
}
