//! MCP tools exposed by the server
//!
//! Tools are grouped by product; each tool lives in its own submodule.

pub mod confluence;
pub mod jira;
