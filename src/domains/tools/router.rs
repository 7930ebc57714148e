//! Tool Router - builds the rmcp ToolRouter from the registry.

use rmcp::handler::server::tool::ToolRouter;

use super::registry::tool_routes;
use crate::core::api::SharedClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: SharedClient) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    tool_routes(&client)
        .into_iter()
        .fold(ToolRouter::new(), |router, route| router.with_route(route))
}

#[cfg(test)]
mod tests {
    use super::super::registry::TOOL_NAMES;
    use super::*;
    use crate::core::api::mock::MockClient;
    use serde_json::json;
    use std::sync::Arc;

    struct TestServer {}

    fn test_client() -> SharedClient {
        Arc::new(MockClient::ok(json!({})))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 38);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_file"));
        assert!(names.contains(&"post_webhook"));
        assert!(names.contains(&"put_dev_resources"));
    }

    #[test]
    fn test_registry_matches_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(TOOL_NAMES.len(), router_names.len());
        for name in TOOL_NAMES {
            assert!(router_names.contains(name));
        }
    }
}
