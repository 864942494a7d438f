//! Confluence tools for MCP operations
//!
//! This module provides the Confluence page tools using the tool registry
//! pattern. Each tool is in its own submodule.

pub mod create;
pub mod search;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all Confluence tools with the registry
pub fn register_confluence_tools(registry: &mut ToolRegistry) {
    registry.register(create::CreateConfluencePageTool::new());
    registry.register(search::SearchConfluenceTool::new());
}
