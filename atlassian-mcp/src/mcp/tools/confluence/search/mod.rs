//! Confluence search tool for MCP operations
//!
//! This module provides the SearchConfluenceTool for running CQL queries
//! through the MCP protocol.

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::SearchConfluenceRequest;
use crate::mcp::utils::generate_tool_schema;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for searching Confluence content with CQL
#[derive(Default)]
pub struct SearchConfluenceTool;

impl SearchConfluenceTool {
    /// Creates a new instance of the SearchConfluenceTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SearchConfluenceTool {
    fn name(&self) -> &'static str {
        "search-confluence"
    }

    fn description(&self) -> &'static str {
        "Search Confluence content using CQL"
    }

    fn schema(&self) -> serde_json::Value {
        generate_tool_schema::<SearchConfluenceRequest>()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: SearchConfluenceRequest =
            BaseToolImpl::parse_arguments(self.name(), &arguments)?;

        tracing::debug!("Searching Confluence: {}", request.cql);
        let envelope = context
            .tool_handlers
            .handle_search_confluence(request)
            .await;
        Ok(envelope.into_call_tool_result())
    }
}
