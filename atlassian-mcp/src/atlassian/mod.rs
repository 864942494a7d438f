//! HTTP clients for the Jira and Confluence REST APIs
//!
//! [`JiraClient`] and [`ConfluenceClient`] each issue one authenticated
//! request per operation. [`AtlassianClient`] is the single interface the MCP
//! layer talks to, so tool handlers never know which client serves which
//! operation. [`HttpAtlassianClient`] is the production implementation.

pub mod confluence;
pub mod jira;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;
use thiserror::Error;

use crate::config::AtlassianConfig;
use crate::error::{AtlassianMcpError, Result};
use crate::mcp::types::{CreateConfluencePageRequest, CreateJiraIssueRequest};

pub use confluence::{ConfluenceClient, PageSearch};
pub use jira::{IssueSearch, JiraClient};

/// Failure of a single upstream call
#[derive(Debug, Error)]
pub enum AtlassianError {
    /// The request could not be sent or no response was received
    #[error("Request to {url} failed: {source}")]
    Transport {
        /// Target URL
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("HTTP error status {status} from {url}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Target URL
        url: String,
        /// Response body, possibly empty
        body: String,
    },

    /// The response body was not valid JSON
    #[error("Invalid response body from {url}: {source}")]
    InvalidBody {
        /// Target URL
        url: String,
        /// Underlying decode error
        #[source]
        source: reqwest::Error,
    },
}

impl AtlassianError {
    /// HTTP status code, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            AtlassianError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The four upstream operations exposed as MCP tools
#[async_trait]
pub trait AtlassianClient: Send + Sync {
    /// Create a Jira issue and return its upstream representation
    async fn create_issue(
        &self,
        request: &CreateJiraIssueRequest,
    ) -> std::result::Result<Value, AtlassianError>;

    /// Run a JQL search and return the upstream result page
    async fn search_issues(&self, search: &IssueSearch) -> std::result::Result<Value, AtlassianError>;

    /// Create a Confluence page and return its upstream representation
    async fn create_page(
        &self,
        request: &CreateConfluencePageRequest,
    ) -> std::result::Result<Value, AtlassianError>;

    /// Run a CQL search and return the upstream result page
    async fn search_pages(&self, search: &PageSearch) -> std::result::Result<Value, AtlassianError>;
}

/// Production client: Jira and Confluence over HTTPS
#[derive(Debug, Clone)]
pub struct HttpAtlassianClient {
    jira: JiraClient,
    confluence: ConfluenceClient,
}

impl HttpAtlassianClient {
    /// Build both clients from the configuration
    ///
    /// One `reqwest::Client` (and its connection pool) is shared by both.
    pub fn new(config: &AtlassianConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("atlassian-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AtlassianMcpError::HttpClient)?;

        Ok(Self {
            jira: JiraClient::new(http.clone(), config),
            confluence: ConfluenceClient::new(http, config),
        })
    }
}

#[async_trait]
impl AtlassianClient for HttpAtlassianClient {
    async fn create_issue(
        &self,
        request: &CreateJiraIssueRequest,
    ) -> std::result::Result<Value, AtlassianError> {
        self.jira.create_issue(request).await
    }

    async fn search_issues(&self, search: &IssueSearch) -> std::result::Result<Value, AtlassianError> {
        self.jira.search_issues(search).await
    }

    async fn create_page(
        &self,
        request: &CreateConfluencePageRequest,
    ) -> std::result::Result<Value, AtlassianError> {
        self.confluence.create_page(request).await
    }

    async fn search_pages(&self, search: &PageSearch) -> std::result::Result<Value, AtlassianError> {
        self.confluence.search_pages(search).await
    }
}

/// `Authorization` header value for HTTP Basic authentication
pub fn basic_auth_header(username: &str, api_token: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{api_token}")))
}

/// Send a prepared request and decode a JSON body from a 2xx response
async fn send_json(
    request: reqwest::RequestBuilder,
    url: &str,
) -> std::result::Result<Value, AtlassianError> {
    let response = request.send().await.map_err(|source| AtlassianError::Transport {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AtlassianError::Status {
            status: status.as_u16(),
            url: url.to_string(),
            body,
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|source| AtlassianError::InvalidBody {
            url: url.to_string(),
            source,
        })
}
