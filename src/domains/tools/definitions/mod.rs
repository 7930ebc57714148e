//! Tool definitions module.
//!
//! One file per area of the Figma REST API. Every tool is a unit struct
//! implementing [`FigmaTool`](super::FigmaTool); [`all_tools!`] is the single
//! list the registry and router are generated from.

pub mod activity_logs;
pub mod comments;
pub mod common;
pub mod components;
pub mod dev_resources;
pub mod files;
pub mod payments;
pub mod projects;
pub mod styles;
pub mod users;
pub mod variables;
pub mod webhooks;

pub use activity_logs::GetActivityLogsTool;
pub use comments::{
    DeleteCommentReactionTool, DeleteCommentTool, GetCommentReactionsTool, GetCommentsTool,
    PostCommentReactionTool, PostCommentTool,
};
pub use components::{
    GetComponentSetTool, GetComponentTool, GetFileComponentSetsTool, GetFileComponentsTool,
    GetTeamComponentSetsTool, GetTeamComponentsTool,
};
pub use dev_resources::{
    DeleteDevResourceTool, GetDevResourcesTool, PostDevResourcesTool, PutDevResourcesTool,
};
pub use files::{GetFileNodesTool, GetFileTool, GetFileVersionsTool, GetImageFillsTool, GetImagesTool};
pub use payments::GetPaymentsTool;
pub use projects::{GetProjectFilesTool, GetTeamProjectsTool};
pub use styles::{GetFileStylesTool, GetStyleTool, GetTeamStylesTool};
pub use users::GetMeTool;
pub use variables::{GetLocalVariablesTool, GetPublishedVariablesTool, PostVariablesTool};
pub use webhooks::{
    DeleteWebhookTool, GetTeamWebhooksTool, GetWebhookRequestsTool, GetWebhookTool,
    PostWebhookTool, PutWebhookTool,
};

/// Invoke `$callback!` with every tool type, in listing order.
macro_rules! all_tools {
    ($callback:ident) => {
        $callback! {
            // Files
            GetFileTool,
            GetFileNodesTool,
            GetImagesTool,
            GetImageFillsTool,
            GetFileVersionsTool,
            // Projects
            GetTeamProjectsTool,
            GetProjectFilesTool,
            // Comments
            GetCommentsTool,
            PostCommentTool,
            DeleteCommentTool,
            GetCommentReactionsTool,
            PostCommentReactionTool,
            DeleteCommentReactionTool,
            // Users
            GetMeTool,
            // Components
            GetTeamComponentsTool,
            GetFileComponentsTool,
            GetComponentTool,
            GetTeamComponentSetsTool,
            GetFileComponentSetsTool,
            GetComponentSetTool,
            // Styles
            GetTeamStylesTool,
            GetFileStylesTool,
            GetStyleTool,
            // Webhooks
            PostWebhookTool,
            GetWebhookTool,
            PutWebhookTool,
            DeleteWebhookTool,
            GetTeamWebhooksTool,
            GetWebhookRequestsTool,
            // Activity logs and payments
            GetActivityLogsTool,
            GetPaymentsTool,
            // Variables
            GetLocalVariablesTool,
            GetPublishedVariablesTool,
            PostVariablesTool,
            // Dev resources
            GetDevResourcesTool,
            PostDevResourcesTool,
            PutDevResourcesTool,
            DeleteDevResourceTool,
        }
    };
}

pub(crate) use all_tools;
