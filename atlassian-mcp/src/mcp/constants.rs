//! Constants for MCP tool defaults

/// Page size for a Jira search when the caller gives none
pub const DEFAULT_JIRA_MAX_RESULTS: u32 = 50;
/// Issue fields returned by a Jira search when the caller gives none
pub const DEFAULT_JIRA_SEARCH_FIELDS: [&str; 3] = ["summary", "description", "status"];

/// Page size for a Confluence search when the caller gives none
pub const DEFAULT_CONFLUENCE_LIMIT: u32 = 25;
/// Result offset for a Confluence search when the caller gives none
pub const DEFAULT_CONFLUENCE_START: u32 = 0;
