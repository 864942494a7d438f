//! MCP server implementation for the Jira and Confluence tools

use crate::atlassian::{AtlassianClient, HttpAtlassianClient};
use crate::config::AtlassianConfig;
use crate::Result;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use serde_json::Value;
use std::sync::Arc;

use super::tool_handlers::ToolHandlers;
use super::tool_registry::{register_all_tools, ToolContext, ToolRegistry};

/// Name the server reports to MCP clients
pub const SERVER_NAME: &str = "mcp-atlassian";

const INSTRUCTIONS: &str = "Tools for Jira and Confluence. Use create-jira-issue and search-jira-issues (JQL) for issues, create-confluence-page and search-confluence (CQL) for pages. Every tool returns a JSON envelope with a success flag and either the upstream result or an error message.";

/// MCP server exposing the Atlassian tools
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<ToolRegistry>,
    /// Tool context containing shared state for tool execution
    pub tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a new MCP server talking to the configured Atlassian hosts.
    ///
    /// # Arguments
    ///
    /// * `config` - Hosts and credentials for Jira and Confluence
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - The MCP server instance or an error if initialization fails
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: AtlassianConfig) -> Result<Self> {
        tracing::debug!(
            jira = config.jira_base_url(),
            confluence = config.confluence_base_url(),
            "Creating MCP server"
        );
        let client = HttpAtlassianClient::new(&config)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create a new MCP server backed by any client implementation
    pub fn with_client(client: Arc<dyn AtlassianClient>) -> Self {
        let tool_handlers = Arc::new(ToolHandlers::new(client));
        let tool_context = Arc::new(ToolContext::new(tool_handlers));
        let tool_registry = Arc::new(register_all_tools());

        Self {
            tool_registry,
            tool_context,
        }
    }

    /// Names of every registered tool, sorted
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_registry.list_tool_names()
    }

    /// Tool definitions as advertised in `tools/list`
    pub fn list_tool_definitions(&self) -> Vec<Tool> {
        self.tool_registry.list_tools()
    }

    /// Invoke a tool by name, outside of any MCP session
    pub async fn call_tool_by_name(
        &self,
        name: &str,
        arguments: serde_json::Map<String, Value>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.tool_registry
            .call_tool(name, arguments, &self.tool_context)
            .await
    }
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );
        Ok(self.get_info())
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.call_tool_by_name(&request.name, request.arguments.unwrap_or_default())
            .await
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities {
                prompts: None,
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                resources: None,
                logging: None,
                completions: None,
                experimental: None,
            },
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(INSTRUCTIONS.into()),
        }
    }
}
