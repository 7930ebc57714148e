//! File tools: documents, nodes, rendered images, image fills and version
//! history.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::{ApiRequest, QueryParams};
use crate::domains::tools::{FigmaTool, ToolError};

use super::common::{
    FileKeyParams, id_list, optional_id_list, optional_text, path_param, require,
};

// ============================================================================
// get_file
// ============================================================================

/// Parameters for fetching a whole file document.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFileParams {
    #[schemars(description = "File key to retrieve")]
    pub file_key: String,

    #[schemars(description = "Version id to retrieve (default: current version)")]
    #[serde(default, deserialize_with = "optional_text")]
    pub version: Option<String>,

    #[schemars(description = "Comma-separated node ids (or an array) to restrict the document to")]
    #[serde(default, deserialize_with = "optional_id_list")]
    pub ids: Option<String>,

    #[schemars(description = "How deep into the document tree to traverse (1 = pages only)")]
    #[serde(default)]
    pub depth: Option<u32>,

    #[schemars(description = "Set to \"paths\" to export vector data")]
    #[serde(default)]
    pub geometry: Option<String>,

    #[schemars(description = "Comma-separated plugin ids (or \"shared\") whose plugin data to include")]
    #[serde(default)]
    pub plugin_data: Option<String>,

    #[schemars(description = "Include branch metadata for the file")]
    #[serde(default)]
    pub branch_data: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct GetFileTool;

impl FigmaTool for GetFileTool {
    const NAME: &'static str = "get_file";
    const DESCRIPTION: &'static str = "Retrieve a Figma file as JSON: its document tree, components and styles. \
         Use 'ids' and 'depth' to limit the size of the response for large files.";

    type Params = GetFileParams;

    fn request(params: &GetFileParams) -> Result<ApiRequest, ToolError> {
        let file_key = path_param("file_key", &params.file_key)?;

        let query = QueryParams::new()
            .optional("version", params.version.as_ref())
            .optional("ids", params.ids.as_ref())
            .optional("depth", params.depth)
            .optional("geometry", params.geometry.as_ref())
            .optional("plugin_data", params.plugin_data.as_ref())
            .optional("branch_data", params.branch_data);

        Ok(ApiRequest::get(format!("/v1/files/{}", file_key)).with_query(query))
    }
}

// ============================================================================
// get_file_nodes
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFileNodesParams {
    #[schemars(description = "File key containing the nodes")]
    pub file_key: String,

    #[schemars(description = "Comma-separated node ids (or an array) to retrieve")]
    #[serde(deserialize_with = "id_list")]
    pub ids: String,

    #[schemars(description = "Version id to retrieve (default: current version)")]
    #[serde(default, deserialize_with = "optional_text")]
    pub version: Option<String>,

    #[schemars(description = "How deep into each node's subtree to traverse")]
    #[serde(default)]
    pub depth: Option<u32>,

    #[schemars(description = "Set to \"paths\" to export vector data")]
    #[serde(default)]
    pub geometry: Option<String>,

    #[schemars(description = "Comma-separated plugin ids (or \"shared\") whose plugin data to include")]
    #[serde(default)]
    pub plugin_data: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetFileNodesTool;

impl FigmaTool for GetFileNodesTool {
    const NAME: &'static str = "get_file_nodes";
    const DESCRIPTION: &'static str =
        "Retrieve specific nodes of a Figma file by id, along with their subtrees, components and styles.";

    type Params = GetFileNodesParams;

    fn request(params: &GetFileNodesParams) -> Result<ApiRequest, ToolError> {
        let file_key = path_param("file_key", &params.file_key)?;
        let ids = require("ids", &params.ids)?;

        let query = QueryParams::new()
            .required("ids", ids)
            .optional("version", params.version.as_ref())
            .optional("depth", params.depth)
            .optional("geometry", params.geometry.as_ref())
            .optional("plugin_data", params.plugin_data.as_ref());

        Ok(ApiRequest::get(format!("/v1/files/{}/nodes", file_key)).with_query(query))
    }
}

// ============================================================================
// get_images
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetImagesParams {
    #[schemars(description = "File key containing the nodes to render")]
    pub file_key: String,

    #[schemars(description = "Comma-separated node ids (or an array) to render")]
    #[serde(deserialize_with = "id_list")]
    pub ids: String,

    #[schemars(description = "Version id to render (default: current version)")]
    #[serde(default, deserialize_with = "optional_text")]
    pub version: Option<String>,

    #[schemars(description = "Image scale factor between 0.01 and 4")]
    #[serde(default)]
    pub scale: Option<f64>,

    #[schemars(description = "Image format: jpg, png, svg or pdf")]
    #[serde(default)]
    pub format: Option<String>,

    #[schemars(description = "SVG only: render text as outlines")]
    #[serde(default)]
    pub svg_outline_text: Option<bool>,

    #[schemars(description = "SVG only: include id attributes on elements")]
    #[serde(default)]
    pub svg_include_id: Option<bool>,

    #[schemars(description = "SVG only: include node ids as data attributes")]
    #[serde(default)]
    pub svg_include_node_id: Option<bool>,

    #[schemars(description = "SVG only: simplify inside/outside strokes")]
    #[serde(default)]
    pub svg_simplify_stroke: Option<bool>,

    #[schemars(description = "Exclude content overlapping the node from the render")]
    #[serde(default)]
    pub contents_only: Option<bool>,

    #[schemars(description = "Use the node's full dimensions even if cropped")]
    #[serde(default)]
    pub use_absolute_bounds: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct GetImagesTool;

impl FigmaTool for GetImagesTool {
    const NAME: &'static str = "get_images";
    const DESCRIPTION: &'static str = "Render nodes of a Figma file as images. \
         Returns a map from node id to a temporary image URL (null if the node could not be rendered).";

    type Params = GetImagesParams;

    fn request(params: &GetImagesParams) -> Result<ApiRequest, ToolError> {
        let file_key = path_param("file_key", &params.file_key)?;
        let ids = require("ids", &params.ids)?;

        let query = QueryParams::new()
            .required("ids", ids)
            .optional("version", params.version.as_ref())
            .optional("scale", params.scale)
            .optional("format", params.format.as_ref())
            .optional("svg_outline_text", params.svg_outline_text)
            .optional("svg_include_id", params.svg_include_id)
            .optional("svg_include_node_id", params.svg_include_node_id)
            .optional("svg_simplify_stroke", params.svg_simplify_stroke)
            .optional("contents_only", params.contents_only)
            .optional("use_absolute_bounds", params.use_absolute_bounds);

        Ok(ApiRequest::get(format!("/v1/images/{}", file_key)).with_query(query))
    }
}

// ============================================================================
// get_image_fills
// ============================================================================

#[derive(Debug, Clone)]
pub struct GetImageFillsTool;

impl FigmaTool for GetImageFillsTool {
    const NAME: &'static str = "get_image_fills";
    const DESCRIPTION: &'static str =
        "List download URLs for every image used as an image fill in a Figma file, keyed by image reference.";

    type Params = FileKeyParams;

    fn request(params: &FileKeyParams) -> Result<ApiRequest, ToolError> {
        let file_key = path_param("file_key", &params.file_key)?;
        Ok(ApiRequest::get(format!("/v1/files/{}/images", file_key)))
    }
}

// ============================================================================
// get_file_versions
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFileVersionsParams {
    #[schemars(description = "File key whose version history to list")]
    pub file_key: String,

    #[schemars(description = "Number of versions per page")]
    #[serde(default)]
    pub page_size: Option<u32>,

    #[schemars(description = "Cursor: return versions created before this version id")]
    #[serde(default, deserialize_with = "optional_text")]
    pub before: Option<String>,

    #[schemars(description = "Cursor: return versions created after this version id")]
    #[serde(default, deserialize_with = "optional_text")]
    pub after: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetFileVersionsTool;

impl FigmaTool for GetFileVersionsTool {
    const NAME: &'static str = "get_file_versions";
    const DESCRIPTION: &'static str = "List the version history of a Figma file, one page at a time. \
         Pass the cursors from the response's pagination block to fetch further pages.";

    type Params = GetFileVersionsParams;

    fn request(params: &GetFileVersionsParams) -> Result<ApiRequest, ToolError> {
        let file_key = path_param("file_key", &params.file_key)?;

        let query = QueryParams::new()
            .optional("page_size", params.page_size)
            .optional("before", params.before.as_ref())
            .optional("after", params.after.as_ref());

        Ok(ApiRequest::get(format!("/v1/files/{}/versions", file_key)).with_query(query))
    }
}
