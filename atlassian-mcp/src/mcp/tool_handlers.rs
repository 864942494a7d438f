//! Tool handlers for MCP operations
//!
//! Each handler receives an already validated request, fills in defaults,
//! makes exactly one upstream call and wraps the outcome in a
//! [`ResultEnvelope`]. Handlers never return an error.

use super::constants::{
    DEFAULT_CONFLUENCE_LIMIT, DEFAULT_CONFLUENCE_START, DEFAULT_JIRA_MAX_RESULTS,
    DEFAULT_JIRA_SEARCH_FIELDS,
};
use super::responses::{PayloadKind, ResultEnvelope};
use super::types::{
    CreateConfluencePageRequest, CreateJiraIssueRequest, SearchConfluenceRequest,
    SearchJiraIssuesRequest,
};
use crate::atlassian::{AtlassianClient, IssueSearch, PageSearch};
use std::sync::Arc;

/// Tool handler functions for MCP server operations
#[derive(Clone)]
pub struct ToolHandlers {
    client: Arc<dyn AtlassianClient>,
}

impl ToolHandlers {
    /// Create a new tool handlers instance backed by the given client
    pub fn new(client: Arc<dyn AtlassianClient>) -> Self {
        Self { client }
    }

    /// Handle the create-jira-issue tool operation
    pub async fn handle_create_jira_issue(&self, request: CreateJiraIssueRequest) -> ResultEnvelope {
        tracing::debug!("Creating Jira issue in project {}", request.project_key);
        let result = self.client.create_issue(&request).await;
        ResultEnvelope::from_result(PayloadKind::Issue, result, "creating Jira issue")
    }

    /// Handle the search-jira-issues tool operation
    pub async fn handle_search_jira_issues(
        &self,
        request: SearchJiraIssuesRequest,
    ) -> ResultEnvelope {
        let search = issue_search(request);
        let result = self.client.search_issues(&search).await;
        ResultEnvelope::from_result(PayloadKind::Issues, result, "searching Jira issues")
    }

    /// Handle the create-confluence-page tool operation
    pub async fn handle_create_confluence_page(
        &self,
        request: CreateConfluencePageRequest,
    ) -> ResultEnvelope {
        tracing::debug!("Creating Confluence page '{}' in space {}", request.title, request.space_key);
        let result = self.client.create_page(&request).await;
        ResultEnvelope::from_result(PayloadKind::Page, result, "creating Confluence page")
    }

    /// Handle the search-confluence tool operation
    pub async fn handle_search_confluence(&self, request: SearchConfluenceRequest) -> ResultEnvelope {
        let search = page_search(request);
        let result = self.client.search_pages(&search).await;
        ResultEnvelope::from_result(PayloadKind::Results, result, "searching Confluence")
    }
}

/// Apply search defaults: 50 results, summary/description/status fields
pub fn issue_search(request: SearchJiraIssuesRequest) -> IssueSearch {
    IssueSearch {
        jql: request.jql,
        max_results: request.max_results.unwrap_or(DEFAULT_JIRA_MAX_RESULTS),
        fields: request.fields.unwrap_or_else(|| {
            DEFAULT_JIRA_SEARCH_FIELDS
                .iter()
                .map(|field| field.to_string())
                .collect()
        }),
    }
}

/// Apply search defaults: 25 results starting at offset 0
pub fn page_search(request: SearchConfluenceRequest) -> PageSearch {
    PageSearch {
        cql: request.cql,
        limit: request.limit.unwrap_or(DEFAULT_CONFLUENCE_LIMIT),
        start: request.start.unwrap_or(DEFAULT_CONFLUENCE_START),
    }
}
