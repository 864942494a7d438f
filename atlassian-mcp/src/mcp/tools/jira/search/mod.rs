//! Jira search tool for MCP operations
//!
//! This module provides the SearchJiraIssuesTool for running JQL queries
//! through the MCP protocol.

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::SearchJiraIssuesRequest;
use crate::mcp::utils::generate_tool_schema;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for searching Jira issues with JQL
#[derive(Default)]
pub struct SearchJiraIssuesTool;

impl SearchJiraIssuesTool {
    /// Creates a new instance of the SearchJiraIssuesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SearchJiraIssuesTool {
    fn name(&self) -> &'static str {
        "search-jira-issues"
    }

    fn description(&self) -> &'static str {
        "Search Jira issues using JQL"
    }

    fn schema(&self) -> serde_json::Value {
        generate_tool_schema::<SearchJiraIssuesRequest>()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: SearchJiraIssuesRequest =
            BaseToolImpl::parse_arguments(self.name(), &arguments)?;

        tracing::debug!("Searching Jira issues: {}", request.jql);
        let envelope = context
            .tool_handlers
            .handle_search_jira_issues(request)
            .await;
        Ok(envelope.into_call_tool_result())
    }
}
