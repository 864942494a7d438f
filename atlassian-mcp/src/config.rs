//! Configuration management for the Atlassian MCP server
//!
//! All settings come from the process environment and are required. The
//! configuration is read once at startup and then shared read-only by every
//! tool; there are no defaults for hosts or credentials.

use std::env;
use std::fmt;

use thiserror::Error;

/// Jira host, e.g. `your-domain.atlassian.net`
pub const JIRA_HOST_VAR: &str = "JIRA_HOST";
/// Confluence host, e.g. `https://your-domain.atlassian.net`
pub const CONFLUENCE_HOST_VAR: &str = "CONFLUENCE_HOST";
/// Account name used for HTTP Basic authentication
pub const USERNAME_VAR: &str = "ATLASSIAN_USERNAME";
/// API token used as the Basic authentication password
pub const API_TOKEN_VAR: &str = "ATLASSIAN_API_TOKEN";

/// Every variable that must be present before the server starts
pub const REQUIRED_ENV_VARS: [&str; 4] = [JIRA_HOST_VAR, CONFLUENCE_HOST_VAR, USERNAME_VAR, API_TOKEN_VAR];

/// Errors that can occur during configuration loading
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is unset or blank
    #[error("Missing required environment variable: {0}")]
    MissingVariable(&'static str),
}

/// Connection settings for Jira and Confluence
///
/// Hosts are normalized on construction: a value without a scheme gets
/// `https://` prepended and trailing slashes are removed, so both
/// `acme.atlassian.net` and `https://acme.atlassian.net/` are accepted.
#[derive(Clone, PartialEq, Eq)]
pub struct AtlassianConfig {
    jira_host: String,
    confluence_host: String,
    username: String,
    api_token: String,
}

impl AtlassianConfig {
    /// Create a configuration from explicit values
    pub fn new(
        jira_host: impl AsRef<str>,
        confluence_host: impl AsRef<str>,
        username: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            jira_host: normalize_host(jira_host.as_ref()),
            confluence_host: normalize_host(confluence_host.as_ref()),
            username: username.into(),
            api_token: api_token.into(),
        }
    }

    /// Load the configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariable`] naming the first required
    /// variable that is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load the configuration through an arbitrary variable lookup
    ///
    /// Variables are checked in [`REQUIRED_ENV_VARS`] order.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingVariable(key))
        };

        let jira_host = require(JIRA_HOST_VAR)?;
        let confluence_host = require(CONFLUENCE_HOST_VAR)?;
        let username = require(USERNAME_VAR)?;
        let api_token = require(API_TOKEN_VAR)?;

        Ok(Self::new(jira_host, confluence_host, username, api_token))
    }

    /// Base URL of the Jira instance, without a trailing slash
    pub fn jira_base_url(&self) -> &str {
        &self.jira_host
    }

    /// Base URL of the Confluence instance, without a trailing slash
    pub fn confluence_base_url(&self) -> &str {
        &self.confluence_host
    }

    /// Account name used for authentication
    pub fn username(&self) -> &str {
        &self.username
    }

    /// API token used for authentication
    pub fn api_token(&self) -> &str {
        &self.api_token
    }
}

impl fmt::Debug for AtlassianConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtlassianConfig")
            .field("jira_host", &self.jira_host)
            .field("confluence_host", &self.confluence_host)
            .field("username", &self.username)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

/// Turn a configured host into a base URL
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{host}")
    }
}
