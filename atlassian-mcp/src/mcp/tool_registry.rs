//! Tool registry for MCP operations
//!
//! This module provides a registry pattern for managing MCP tools. Each tool
//! is a small type implementing [`McpTool`]; the server only ever talks to
//! the registry.

use super::tool_handlers::ToolHandlers;
use super::validation::{validate_arguments, ToolRequest};
use rmcp::model::{CallToolResult, Tool};
use rmcp::Error as McpError;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Context shared by all tools during execution
#[derive(Clone)]
pub struct ToolContext {
    /// The tool handlers instance containing the business logic
    pub tool_handlers: Arc<ToolHandlers>,
}

impl ToolContext {
    /// Create a new tool context
    pub fn new(tool_handlers: Arc<ToolHandlers>) -> Self {
        Self { tool_handlers }
    }
}

/// Trait defining the interface for all MCP tools
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool's name
    fn name(&self) -> &'static str;

    /// Get the tool's description
    fn description(&self) -> &'static str;

    /// Get the tool's JSON schema for arguments
    fn schema(&self) -> Value;

    /// Execute the tool with the given arguments and context
    async fn execute(
        &self,
        arguments: Map<String, Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Registry for managing MCP tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool in the registry
    ///
    /// A tool registered under an existing name replaces the earlier one.
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Box::new(tool));
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// List all registered tool names, sorted
    pub fn list_tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get all registered tools as Tool objects for MCP list_tools response
    pub fn list_tools(&self) -> Vec<Tool> {
        let mut tools: Vec<Tool> = self
            .tools
            .values()
            .map(|tool| {
                let schema_map = match tool.schema() {
                    Value::Object(map) => map,
                    _ => Map::new(),
                };

                Tool {
                    name: tool.name().into(),
                    description: Some(tool.description().into()),
                    input_schema: Arc::new(schema_map),
                    annotations: None,
                }
            })
            .collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    /// Dispatch a call to the named tool
    ///
    /// Unknown names are rejected before any tool runs.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Map<String, Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        match self.get_tool(name) {
            Some(tool) => {
                tracing::debug!("Executing tool: {}", name);
                tool.execute(arguments, context).await
            }
            None => {
                tracing::warn!("Unknown tool requested: {}", name);
                Err(McpError::invalid_request(format!("Unknown tool: {name}"), None))
            }
        }
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Base implementation providing common utility methods for MCP tools
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Validate tool arguments into a typed request
    ///
    /// # Arguments
    ///
    /// * `tool` - Name of the tool, reported back in the error
    /// * `arguments` - The JSON map of arguments from the MCP request
    ///
    /// # Returns
    ///
    /// * `Result<T, McpError>` - The request, or an `invalid_params` error
    ///   whose data lists every violated field
    pub fn parse_arguments<T: ToolRequest>(
        tool: &str,
        arguments: &Map<String, Value>,
    ) -> std::result::Result<T, McpError> {
        validate_arguments(tool, arguments).map_err(|e| {
            tracing::warn!("{}", e);
            McpError::invalid_params(e.to_string(), Some(e.to_data()))
        })
    }
}

/// Register all Jira tools with the registry
pub fn register_jira_tools(registry: &mut ToolRegistry) {
    use crate::mcp::tools::jira;
    jira::register_jira_tools(registry);
}

/// Register all Confluence tools with the registry
pub fn register_confluence_tools(registry: &mut ToolRegistry) {
    use crate::mcp::tools::confluence;
    confluence::register_confluence_tools(registry);
}

/// Build a registry holding every tool the server exposes
pub fn register_all_tools() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    register_jira_tools(&mut registry);
    register_confluence_tools(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::types::SearchConfluenceRequest;
    use crate::test_utils::{FakeAtlassianClient, FakeOutcome};
    use rmcp::model::{Content, ErrorCode};
    use serde_json::json;

    /// Mock tool for testing
    struct MockTool {
        name: &'static str,
        description: &'static str,
    }

    #[async_trait::async_trait]
    impl McpTool for MockTool {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            self.description
        }

        fn schema(&self) -> Value {
            json!({
                "type": "object",
                "properties": {}
            })
        }

        async fn execute(
            &self,
            _arguments: Map<String, Value>,
            _context: &ToolContext,
        ) -> std::result::Result<CallToolResult, McpError> {
            Ok(CallToolResult::success(vec![Content::text(format!(
                "Mock tool {} executed",
                self.name
            ))]))
        }
    }

    fn context() -> ToolContext {
        let client = Arc::new(FakeAtlassianClient::new(FakeOutcome::Respond(json!({}))));
        ToolContext::new(Arc::new(ToolHandlers::new(client)))
    }

    #[test]
    fn test_tool_registry_creation() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_tool_registration() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "test_tool",
            description: "A test tool",
        });

        assert_eq!(registry.len(), 1);
        assert!(registry.get_tool("test_tool").is_some());
        assert!(registry.get_tool("missing").is_none());
    }

    #[test]
    fn test_duplicate_registration_replaces() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "dup",
            description: "first",
        });
        registry.register(MockTool {
            name: "dup",
            description: "second",
        });

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_tool("dup").unwrap().description(), "second");
    }

    #[test]
    fn test_list_tools_is_sorted() {
        let mut registry = ToolRegistry::new();
        for name in ["zeta", "alpha", "mid"] {
            registry.register(MockTool {
                name,
                description: "sorted",
            });
        }

        assert_eq!(registry.list_tool_names(), vec!["alpha", "mid", "zeta"]);
        let listed: Vec<String> = registry
            .list_tools()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        assert_eq!(listed, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_register_all_tools() {
        let registry = register_all_tools();
        assert_eq!(
            registry.list_tool_names(),
            vec![
                "create-confluence-page",
                "create-jira-issue",
                "search-confluence",
                "search-jira-issues",
            ]
        );
        for tool in registry.list_tools() {
            assert_eq!(tool.input_schema.get("type"), Some(&json!("object")));
            assert!(tool.description.is_some());
        }
    }

    #[tokio::test]
    async fn test_call_tool_dispatches_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "exec_test",
            description: "Execution test tool",
        });

        let result = registry
            .call_tool("exec_test", Map::new(), &context())
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));
        assert!(!result.content.is_empty());
    }

    #[tokio::test]
    async fn test_call_tool_unknown_name() {
        let registry = register_all_tools();
        let error = registry
            .call_tool("delete-everything", Map::new(), &context())
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::INVALID_REQUEST);
        assert_eq!(error.message, "Unknown tool: delete-everything");
    }

    #[test]
    fn test_base_tool_impl_parse_arguments() {
        let args = json!({"cql": "space = DEV", "limit": 10});
        let parsed: SearchConfluenceRequest =
            BaseToolImpl::parse_arguments("search-confluence", args.as_object().unwrap()).unwrap();
        assert_eq!(parsed.cql, "space = DEV");
        assert_eq!(parsed.limit, Some(10));
        assert_eq!(parsed.start, None);
    }

    #[test]
    fn test_base_tool_impl_parse_arguments_error() {
        let result: std::result::Result<SearchConfluenceRequest, McpError> =
            BaseToolImpl::parse_arguments("search-confluence", &Map::new());

        let error = result.unwrap_err();
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
        assert!(error.message.contains("search-confluence"));
        let data = error.data.unwrap();
        assert_eq!(data["violations"][0]["field"], "cql");
        assert_eq!(data["violations"][0]["problem"], "missing");
    }
}
