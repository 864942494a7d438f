//! Jira issue creation tool for MCP operations
//!
//! This module provides the CreateJiraIssueTool for creating issues through
//! the MCP protocol.

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::CreateJiraIssueRequest;
use crate::mcp::utils::generate_tool_schema;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for creating Jira issues
#[derive(Default)]
pub struct CreateJiraIssueTool;

impl CreateJiraIssueTool {
    /// Creates a new instance of the CreateJiraIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateJiraIssueTool {
    fn name(&self) -> &'static str {
        "create-jira-issue"
    }

    fn description(&self) -> &'static str {
        "Create a new Jira issue"
    }

    fn schema(&self) -> serde_json::Value {
        generate_tool_schema::<CreateJiraIssueRequest>()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateJiraIssueRequest = BaseToolImpl::parse_arguments(self.name(), &arguments)?;

        let envelope = context
            .tool_handlers
            .handle_create_jira_issue(request)
            .await;
        if envelope.is_success() {
            tracing::info!("Created Jira issue");
        }
        Ok(envelope.into_call_tool_result())
    }
}
