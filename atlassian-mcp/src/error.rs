//! Unified error handling for the Atlassian MCP library
//!
//! Errors raised while a tool is running are not represented here: they are
//! absorbed into the tool's result envelope (see [`crate::mcp::responses`]).
//! This type covers the failures that stop the server from starting.

use thiserror::Error;

use crate::config::ConfigError;

/// The main error type for the Atlassian MCP library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AtlassianMcpError {
    /// Required configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The shared HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AtlassianMcpError>;
