//! Type definitions for the doctor module

use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};

/// Status of a diagnostic check, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckStatus {
    /// Check passed without issues
    Ok,
    /// Check passed but with potential issues
    Warning,
    /// Check failed with errors
    Error,
}

impl CheckStatus {
    /// Process exit code for a run whose worst check has this status
    pub fn exit_code(self) -> i32 {
        match self {
            CheckStatus::Ok => EXIT_SUCCESS,
            CheckStatus::Warning => EXIT_WARNING,
            CheckStatus::Error => EXIT_ERROR,
        }
    }

    /// Marker printed in front of the check name
    pub fn symbol(self) -> &'static str {
        match self {
            CheckStatus::Ok => "✓",
            CheckStatus::Warning => "⚠",
            CheckStatus::Error => "✗",
        }
    }
}

/// Section of the report a check is printed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckCategory {
    /// Binary and logging setup
    System,
    /// Environment variables
    Environment,
    /// Jira and Confluence hosts
    Hosts,
}

impl CheckCategory {
    /// All categories, in report order
    pub const ALL: [CheckCategory; 3] = [
        CheckCategory::System,
        CheckCategory::Environment,
        CheckCategory::Hosts,
    ];

    /// Section heading
    pub fn title(self) -> &'static str {
        match self {
            CheckCategory::System => "System Checks:",
            CheckCategory::Environment => "Environment:",
            CheckCategory::Hosts => "Hosts:",
        }
    }
}

/// Result of a single diagnostic check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    /// Name of the check performed
    pub name: String,
    /// Report section
    pub category: CheckCategory,
    /// Status of the check
    pub status: CheckStatus,
    /// What was found
    pub message: String,
    /// How to resolve a warning or error
    pub fix: Option<String>,
}

impl Check {
    /// A passing check
    ///
    /// ```
    /// use atlassian_mcp_cli::doctor::{Check, CheckCategory, CheckStatus};
    ///
    /// let check = Check::ok("JIRA_HOST", CheckCategory::Environment, "acme.atlassian.net");
    /// assert_eq!(check.status, CheckStatus::Ok);
    /// assert!(check.fix.is_none());
    /// ```
    pub fn ok(
        name: impl Into<String>,
        category: CheckCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            status: CheckStatus::Ok,
            message: message.into(),
            fix: None,
        }
    }

    /// A check that found a problem worth fixing but not fatal
    pub fn warning(
        name: impl Into<String>,
        category: CheckCategory,
        message: impl Into<String>,
        fix: impl Into<String>,
    ) -> Self {
        Self::failed(CheckStatus::Warning, name, category, message, fix)
    }

    /// A check that would stop the server from working
    pub fn error(
        name: impl Into<String>,
        category: CheckCategory,
        message: impl Into<String>,
        fix: impl Into<String>,
    ) -> Self {
        Self::failed(CheckStatus::Error, name, category, message, fix)
    }

    fn failed(
        status: CheckStatus,
        name: impl Into<String>,
        category: CheckCategory,
        message: impl Into<String>,
        fix: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            status,
            message: message.into(),
            fix: Some(fix.into()),
        }
    }
}
