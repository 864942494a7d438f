//! Request types for MCP operations
//!
//! Field names follow the wire format (camelCase). The JSON schemas published
//! in `tools/list` are derived from these types; the [`ToolRequest`] impls
//! are what actually gate a call.

use serde_json::{Map, Value};

use super::validation::{ArgumentReader, FieldViolation, ToolRequest};

/// Request to create a Jira issue
#[derive(Debug, Clone, PartialEq, schemars::JsonSchema)]
#[schemars(rename_all = "camelCase")]
pub struct CreateJiraIssueRequest {
    /// Key of the project that will own the issue (e.g. `PROJ`)
    pub project_key: String,
    /// One-line summary of the issue
    pub summary: String,
    /// Longer description of the issue
    pub description: Option<String>,
    /// Issue type name (e.g. `Bug`, `Task`, `Story`)
    pub issue_type: String,
    /// Priority name (e.g. `High`)
    pub priority: Option<String>,
    /// Account name of the assignee
    pub assignee: Option<String>,
    /// Labels to attach to the issue
    pub labels: Option<Vec<String>>,
}

impl ToolRequest for CreateJiraIssueRequest {
    fn from_arguments(arguments: &Map<String, Value>) -> Result<Self, Vec<FieldViolation>> {
        let mut reader = ArgumentReader::new(arguments);
        let project_key = reader.required_string("projectKey");
        let summary = reader.required_string("summary");
        let description = reader.optional_string("description");
        let issue_type = reader.required_string("issueType");
        let priority = reader.optional_string("priority");
        let assignee = reader.optional_string("assignee");
        let labels = reader.optional_string_list("labels");
        reader.finish()?;

        match (project_key, summary, issue_type) {
            (Some(project_key), Some(summary), Some(issue_type)) => Ok(Self {
                project_key,
                summary,
                description,
                issue_type,
                priority,
                assignee,
                labels,
            }),
            _ => Err(Vec::new()),
        }
    }
}

/// Request to search Jira issues
#[derive(Debug, Clone, PartialEq, schemars::JsonSchema)]
#[schemars(rename_all = "camelCase")]
pub struct SearchJiraIssuesRequest {
    /// JQL query (e.g. `project = PROJ AND status = "In Progress"`)
    pub jql: String,
    /// Maximum number of issues to return (default: 50)
    pub max_results: Option<u32>,
    /// Issue fields to include (default: summary, description, status)
    pub fields: Option<Vec<String>>,
}

impl ToolRequest for SearchJiraIssuesRequest {
    fn from_arguments(arguments: &Map<String, Value>) -> Result<Self, Vec<FieldViolation>> {
        let mut reader = ArgumentReader::new(arguments);
        let jql = reader.required_string("jql");
        let max_results = reader.optional_u32("maxResults");
        let fields = reader.optional_string_list("fields");
        reader.finish()?;

        jql.map(|jql| Self {
            jql,
            max_results,
            fields,
        })
        .ok_or_else(Vec::new)
    }
}

/// Request to create a Confluence page
#[derive(Debug, Clone, PartialEq, schemars::JsonSchema)]
#[schemars(rename_all = "camelCase")]
pub struct CreateConfluencePageRequest {
    /// Key of the space the page is created in
    pub space_key: String,
    /// Page title
    pub title: String,
    /// Page body in Confluence storage format (XHTML)
    pub content: String,
    /// Id of the parent page
    pub parent_id: Option<String>,
    /// Labels to attach to the page
    pub labels: Option<Vec<String>>,
}

impl ToolRequest for CreateConfluencePageRequest {
    fn from_arguments(arguments: &Map<String, Value>) -> Result<Self, Vec<FieldViolation>> {
        let mut reader = ArgumentReader::new(arguments);
        let space_key = reader.required_string("spaceKey");
        let title = reader.required_string("title");
        let content = reader.required_string("content");
        let parent_id = reader.optional_string("parentId");
        let labels = reader.optional_string_list("labels");
        reader.finish()?;

        match (space_key, title, content) {
            (Some(space_key), Some(title), Some(content)) => Ok(Self {
                space_key,
                title,
                content,
                parent_id,
                labels,
            }),
            _ => Err(Vec::new()),
        }
    }
}

/// Request to search Confluence content
#[derive(Debug, Clone, PartialEq, schemars::JsonSchema)]
#[schemars(rename_all = "camelCase")]
pub struct SearchConfluenceRequest {
    /// CQL query (e.g. `space = DEV AND type = page`)
    pub cql: String,
    /// Maximum number of results to return (default: 25)
    pub limit: Option<u32>,
    /// Offset of the first result (default: 0)
    pub start: Option<u32>,
}

impl ToolRequest for SearchConfluenceRequest {
    fn from_arguments(arguments: &Map<String, Value>) -> Result<Self, Vec<FieldViolation>> {
        let mut reader = ArgumentReader::new(arguments);
        let cql = reader.required_string("cql");
        let limit = reader.optional_u32("limit");
        let start = reader.optional_u32("start");
        reader.finish()?;

        cql.map(|cql| Self { cql, limit, start }).ok_or_else(Vec::new)
    }
}
