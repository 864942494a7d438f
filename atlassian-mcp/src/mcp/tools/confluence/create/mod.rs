//! Confluence page creation tool for MCP operations
//!
//! This module provides the CreateConfluencePageTool for creating pages
//! through the MCP protocol.

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateConfluencePageRequest;
use crate::mcp::utils::generate_tool_schema;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for creating Confluence pages
#[derive(Default)]
pub struct CreateConfluencePageTool;

impl CreateConfluencePageTool {
    /// Creates a new instance of the CreateConfluencePageTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateConfluencePageTool {
    fn name(&self) -> &'static str {
        "create-confluence-page"
    }

    fn description(&self) -> &'static str {
        "Create a new Confluence page"
    }

    fn schema(&self) -> serde_json::Value {
        generate_tool_schema::<CreateConfluencePageRequest>()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateConfluencePageRequest =
            BaseToolImpl::parse_arguments(self.name(), &arguments)?;

        let envelope = context
            .tool_handlers
            .handle_create_confluence_page(request)
            .await;
        if envelope.is_success() {
            tracing::info!("Created Confluence page");
        }
        Ok(envelope.into_call_tool_result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::responses::envelope_json;
    use crate::mcp::tool_handlers::ToolHandlers;
    use crate::mcp::utils::required_fields;
    use crate::test_utils::{FakeAtlassianClient, FakeOutcome};
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_schema_required_fields() {
        let schema = CreateConfluencePageTool::new().schema();
        assert_eq!(required_fields(&schema), vec!["content", "spaceKey", "title"]);
    }

    #[tokio::test]
    async fn test_execute_reports_upstream_failure() {
        let client = Arc::new(FakeAtlassianClient::new(FakeOutcome::Status(403)));
        let context = ToolContext::new(Arc::new(ToolHandlers::new(client.clone())));

        let arguments = json!({
            "spaceKey": "DEV",
            "title": "Runbook",
            "content": "<p>Steps</p>"
        });
        let result = CreateConfluencePageTool::new()
            .execute(arguments.as_object().unwrap().clone(), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        let envelope = envelope_json(&result).unwrap();
        assert_eq!(envelope["success"], false);
        assert!(envelope["error"].as_str().unwrap().contains("403"));
        assert!(envelope.get("page").is_none());
        assert_eq!(client.calls(), vec!["create_page"]);
    }
}
