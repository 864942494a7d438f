//! # Atlassian MCP
//!
//! Model Context Protocol tools for Jira and Confluence.
//!
//! ## Features
//!
//! - **Jira**: create issues and search them with JQL
//! - **Confluence**: create pages and search content with CQL
//! - **MCP Support**: a tool registry served over stdio by the CLI crate
//!
//! Every tool call is a single upstream round trip. Upstream failures never
//! escape a tool: they come back to the caller as a result envelope with
//! `success: false` and an `error` message.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use atlassian_mcp::{AtlassianConfig, mcp::McpServer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AtlassianConfig::from_env()?;
//! let server = McpServer::new(config)?;
//! assert_eq!(server.tool_names().len(), 4);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Environment-backed configuration
pub mod config;

/// Library error types
pub mod error;

/// HTTP clients for the Jira and Confluence REST APIs
pub mod atlassian;

/// Model Context Protocol (MCP) server support
pub mod mcp;

pub use atlassian::{AtlassianClient, AtlassianError, HttpAtlassianClient};
pub use config::{AtlassianConfig, ConfigError};
pub use error::{AtlassianMcpError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Test utilities module for testing support
#[doc(hidden)]
pub mod test_utils;
