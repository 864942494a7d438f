//! Test utilities for Atlassian MCP tests
//!
//! This module provides shared testing infrastructure: an in-memory
//! [`AtlassianClient`] that records every call it receives, and helpers that
//! build a configuration pointing both products at a local mock server.
//!
//! # Usage Patterns
//!
//! ## For Unit Tests
//! ```no_run
//! use atlassian_mcp::mcp::McpServer;
//! use atlassian_mcp::test_utils::{FakeAtlassianClient, FakeOutcome};
//! use std::sync::Arc;
//!
//! let client = Arc::new(FakeAtlassianClient::new(FakeOutcome::Status(500)));
//! let server = McpServer::with_client(client.clone());
//! assert_eq!(client.call_count(), 0);
//! ```
//!
//! ## For Integration Tests
//! Integration tests that talk HTTP use [`config_for_mock_server`] with the
//! URI of a running mock server.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::Value;

use crate::atlassian::{AtlassianClient, AtlassianError, IssueSearch, PageSearch};
use crate::config::AtlassianConfig;
use crate::mcp::types::{CreateConfluencePageRequest, CreateJiraIssueRequest};

/// Username used by [`config_for_mock_server`]
pub const TEST_USERNAME: &str = "bot@acme.test";

/// API token used by [`config_for_mock_server`]
pub const TEST_API_TOKEN: &str = "secret-token";

/// Configuration with both products served from `base_url`
pub fn config_for_mock_server(base_url: &str) -> AtlassianConfig {
    AtlassianConfig::new(base_url, base_url, TEST_USERNAME, TEST_API_TOKEN)
}

/// What every call to a [`FakeAtlassianClient`] returns
#[derive(Debug, Clone)]
pub enum FakeOutcome {
    /// Succeed with this body
    Respond(Value),
    /// Fail as if the server answered with this status
    Status(u16),
}

#[derive(Debug, Default)]
struct Recorded {
    calls: Vec<&'static str>,
    issue_requests: Vec<CreateJiraIssueRequest>,
    issue_searches: Vec<IssueSearch>,
    page_requests: Vec<CreateConfluencePageRequest>,
    page_searches: Vec<PageSearch>,
}

/// In-memory client that records requests and returns a fixed outcome
#[derive(Debug)]
pub struct FakeAtlassianClient {
    outcome: FakeOutcome,
    recorded: Mutex<Recorded>,
}

impl FakeAtlassianClient {
    /// Create a client that answers every call with `outcome`
    pub fn new(outcome: FakeOutcome) -> Self {
        Self {
            outcome,
            recorded: Mutex::new(Recorded::default()),
        }
    }

    /// Operation names in the order they were called
    pub fn calls(&self) -> Vec<&'static str> {
        self.recorded().calls.clone()
    }

    /// Total number of upstream calls
    pub fn call_count(&self) -> usize {
        self.recorded().calls.len()
    }

    /// Most recent create-issue request
    pub fn last_issue_request(&self) -> Option<CreateJiraIssueRequest> {
        self.recorded().issue_requests.last().cloned()
    }

    /// Most recent issue search, with defaults applied
    pub fn last_issue_search(&self) -> Option<IssueSearch> {
        self.recorded().issue_searches.last().cloned()
    }

    /// Most recent create-page request
    pub fn last_page_request(&self) -> Option<CreateConfluencePageRequest> {
        self.recorded().page_requests.last().cloned()
    }

    /// Most recent page search, with defaults applied
    pub fn last_page_search(&self) -> Option<PageSearch> {
        self.recorded().page_searches.last().cloned()
    }

    fn recorded(&self) -> MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn respond(&self, url: &str) -> Result<Value, AtlassianError> {
        match &self.outcome {
            FakeOutcome::Respond(body) => Ok(body.clone()),
            FakeOutcome::Status(status) => Err(AtlassianError::Status {
                status: *status,
                url: format!("https://fake.test{url}"),
                body: String::new(),
            }),
        }
    }
}

#[async_trait]
impl AtlassianClient for FakeAtlassianClient {
    async fn create_issue(&self, request: &CreateJiraIssueRequest) -> Result<Value, AtlassianError> {
        {
            let mut recorded = self.recorded();
            recorded.calls.push("create_issue");
            recorded.issue_requests.push(request.clone());
        }
        self.respond("/rest/api/2/issue")
    }

    async fn search_issues(&self, search: &IssueSearch) -> Result<Value, AtlassianError> {
        {
            let mut recorded = self.recorded();
            recorded.calls.push("search_issues");
            recorded.issue_searches.push(search.clone());
        }
        self.respond("/rest/api/2/search")
    }

    async fn create_page(
        &self,
        request: &CreateConfluencePageRequest,
    ) -> Result<Value, AtlassianError> {
        {
            let mut recorded = self.recorded();
            recorded.calls.push("create_page");
            recorded.page_requests.push(request.clone());
        }
        self.respond("/wiki/rest/api/content")
    }

    async fn search_pages(&self, search: &PageSearch) -> Result<Value, AtlassianError> {
        {
            let mut recorded = self.recorded();
            recorded.calls.push("search_pages");
            recorded.page_searches.push(search.clone());
        }
        self.respond("/wiki/rest/api/content/search")
    }
}
