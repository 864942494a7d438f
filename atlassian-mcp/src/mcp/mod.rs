//! Model Context Protocol (MCP) server support
//!
//! This module exposes the Jira and Confluence operations as MCP tools:
//! request validation, the tool registry, the per-tool handlers and the
//! `ServerHandler` implementation.

// Module declarations
pub mod constants;
pub mod responses;
pub mod server;
pub mod tool_handlers;
pub mod tool_registry;
pub mod tools;
pub mod types;
pub mod utils;
pub mod validation;

#[cfg(test)]
mod tests;

// Re-export commonly used items from submodules
pub use responses::{envelope_json, PayloadKind, ResultEnvelope};
pub use server::McpServer;
pub use tool_handlers::ToolHandlers;
pub use tool_registry::{
    register_all_tools, register_confluence_tools, register_jira_tools, McpTool, ToolContext,
    ToolRegistry,
};
pub use types::{
    CreateConfluencePageRequest, CreateJiraIssueRequest, SearchConfluenceRequest,
    SearchJiraIssuesRequest,
};
pub use validation::{FieldViolation, ValidationError, ViolationKind};
