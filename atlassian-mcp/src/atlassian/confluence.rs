//! Confluence REST API client

use serde::Serialize;
use serde_json::Value;

use super::{basic_auth_header, send_json, AtlassianError};
use crate::config::AtlassianConfig;
use crate::mcp::types::CreateConfluencePageRequest;

const CONTENT_PATH: &str = "/wiki/rest/api/content";
const SEARCH_PATH: &str = "/wiki/rest/api/content/search";

/// A CQL search with every default already applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSearch {
    /// CQL query string
    pub cql: String,
    /// Page size
    pub limit: u32,
    /// Offset of the first result
    pub start: u32,
}

impl PageSearch {
    /// Query parameters, in the order they are sent
    pub fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("cql", self.cql.clone()),
            ("limit", self.limit.to_string()),
            ("start", self.start.to_string()),
        ]
    }
}

#[derive(Serialize)]
struct SpaceRef<'a> {
    key: &'a str,
}

#[derive(Serialize)]
struct Storage<'a> {
    value: &'a str,
    representation: &'static str,
}

#[derive(Serialize)]
struct PageBody<'a> {
    storage: Storage<'a>,
}

#[derive(Serialize)]
struct Ancestor<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct Label<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct Metadata<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<Vec<Label<'a>>>,
}

#[derive(Serialize)]
struct CreatePageBody<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    title: &'a str,
    space: SpaceRef<'a>,
    body: PageBody<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ancestors: Option<[Ancestor<'a>; 1]>,
    metadata: Metadata<'a>,
}

/// Client for page creation and CQL search
#[derive(Debug, Clone)]
pub struct ConfluenceClient {
    http: reqwest::Client,
    base_url: String,
    authorization: String,
}

impl ConfluenceClient {
    /// Create a client for the configured Confluence host
    pub fn new(http: reqwest::Client, config: &AtlassianConfig) -> Self {
        Self {
            http,
            base_url: config.confluence_base_url().to_string(),
            authorization: basic_auth_header(config.username(), config.api_token()),
        }
    }

    /// Body of the create-page call
    ///
    /// `ancestors` is only present when a non-empty parent page id is given.
    pub fn create_page_body(request: &CreateConfluencePageRequest) -> impl Serialize + Sync + '_ {
        CreatePageBody {
            kind: "page",
            title: &request.title,
            space: SpaceRef {
                key: &request.space_key,
            },
            body: PageBody {
                storage: Storage {
                    value: &request.content,
                    representation: "storage",
                },
            },
            ancestors: request
                .parent_id
                .as_deref()
                .filter(|id| !id.is_empty())
                .map(|id| [Ancestor { id }]),
            metadata: Metadata {
                labels: request
                    .labels
                    .as_ref()
                    .map(|labels| labels.iter().map(|name| Label { name }).collect()),
            },
        }
    }

    /// Create a page
    pub async fn create_page(
        &self,
        request: &CreateConfluencePageRequest,
    ) -> Result<Value, AtlassianError> {
        let url = format!("{}{CONTENT_PATH}", self.base_url);
        tracing::debug!(%url, space = %request.space_key, title = %request.title, "creating Confluence page");

        let builder = self
            .http
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, &self.authorization)
            .json(&Self::create_page_body(request));
        send_json(builder, &url).await
    }

    /// Search content with CQL
    pub async fn search_pages(&self, search: &PageSearch) -> Result<Value, AtlassianError> {
        let url = format!("{}{SEARCH_PATH}", self.base_url);
        tracing::debug!(%url, cql = %search.cql, limit = search.limit, start = search.start, "searching Confluence");

        let builder = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, &self.authorization)
            .query(&search.query_pairs());
        send_json(builder, &url).await
    }
}
