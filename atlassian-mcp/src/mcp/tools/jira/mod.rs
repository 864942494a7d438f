//! Jira tools for MCP operations
//!
//! This module provides the Jira issue tools using the tool registry pattern.
//! Each tool is in its own submodule.

pub mod create;
pub mod search;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all Jira tools with the registry
pub fn register_jira_tools(registry: &mut ToolRegistry) {
    registry.register(create::CreateJiraIssueTool::new());
    registry.register(search::SearchJiraIssuesTool::new());
}
