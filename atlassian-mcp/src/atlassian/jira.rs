//! Jira REST API v2 client

use serde::Serialize;
use serde_json::Value;

use super::{basic_auth_header, send_json, AtlassianError};
use crate::config::AtlassianConfig;
use crate::mcp::types::CreateJiraIssueRequest;

const ISSUE_PATH: &str = "/rest/api/2/issue";
const SEARCH_PATH: &str = "/rest/api/2/search";

/// A JQL search with every default already applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSearch {
    /// JQL query string
    pub jql: String,
    /// Page size
    pub max_results: u32,
    /// Issue fields to return
    pub fields: Vec<String>,
}

#[derive(Serialize)]
struct KeyRef<'a> {
    key: &'a str,
}

#[derive(Serialize)]
struct NameRef<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct IssueFields<'a> {
    project: KeyRef<'a>,
    summary: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    issuetype: NameRef<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<NameRef<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assignee: Option<NameRef<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<&'a [String]>,
}

#[derive(Serialize)]
struct CreateIssueBody<'a> {
    fields: IssueFields<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchBody<'a> {
    jql: &'a str,
    start_at: u32,
    max_results: u32,
    fields: &'a [String],
}

fn name_ref(name: Option<&str>) -> Option<NameRef<'_>> {
    name.filter(|name| !name.is_empty()).map(|name| NameRef { name })
}

/// Client for issue creation and JQL search
#[derive(Debug, Clone)]
pub struct JiraClient {
    http: reqwest::Client,
    base_url: String,
    authorization: String,
}

impl JiraClient {
    /// Create a client for the configured Jira host
    pub fn new(http: reqwest::Client, config: &AtlassianConfig) -> Self {
        Self {
            http,
            base_url: config.jira_base_url().to_string(),
            authorization: basic_auth_header(config.username(), config.api_token()),
        }
    }

    /// Body of the create-issue call
    ///
    /// Optional references are left out entirely when absent or empty.
    pub fn create_issue_body(request: &CreateJiraIssueRequest) -> impl Serialize + Sync + '_ {
        CreateIssueBody {
            fields: IssueFields {
                project: KeyRef {
                    key: &request.project_key,
                },
                summary: &request.summary,
                description: request.description.as_deref(),
                issuetype: NameRef {
                    name: &request.issue_type,
                },
                priority: name_ref(request.priority.as_deref()),
                assignee: name_ref(request.assignee.as_deref()),
                labels: request.labels.as_deref(),
            },
        }
    }

    /// Body of the search call
    pub fn search_body(search: &IssueSearch) -> impl Serialize + Sync + '_ {
        SearchBody {
            jql: &search.jql,
            start_at: 0,
            max_results: search.max_results,
            fields: &search.fields,
        }
    }

    /// Create an issue
    pub async fn create_issue(&self, request: &CreateJiraIssueRequest) -> Result<Value, AtlassianError> {
        let url = format!("{}{ISSUE_PATH}", self.base_url);
        tracing::debug!(%url, project = %request.project_key, "creating Jira issue");
        self.post(&url, &Self::create_issue_body(request)).await
    }

    /// Search issues with JQL
    pub async fn search_issues(&self, search: &IssueSearch) -> Result<Value, AtlassianError> {
        let url = format!("{}{SEARCH_PATH}", self.base_url);
        tracing::debug!(%url, jql = %search.jql, max_results = search.max_results, "searching Jira issues");
        self.post(&url, &Self::search_body(search)).await
    }

    async fn post<B: Serialize + Sync>(&self, url: &str, body: &B) -> Result<Value, AtlassianError> {
        let request = self
            .http
            .post(url)
            .header(reqwest::header::AUTHORIZATION, &self.authorization)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body);
        send_json(request, url).await
    }
}
