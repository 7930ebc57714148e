//! Tools domain module.
//!
//! Each tool wraps exactly one Figma REST endpoint.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations, one file per API area
//! - `handlers.rs` - The [`FigmaTool`] trait and the shared call path
//! - `registry.rs` - Tool names, metadata and HTTP dispatch
//! - `router.rs` - rmcp ToolRouter for STDIO transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Define a params struct and a unit struct implementing `FigmaTool`
//!    in the matching file under `definitions/`
//! 2. Export it in `definitions/mod.rs` and add it to `all_tools!`
//!
//! The registry and router pick it up from there.

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use error::ToolError;
pub use handlers::*;
pub use registry::{TOOL_NAMES, ToolRegistry};
pub use router::build_tool_router;
