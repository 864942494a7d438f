//! Check implementations for the doctor module
//!
//! Every check reads the environment through a lookup function so the same
//! code runs against the process environment and against fixed test values.

use super::types::*;
use crate::logging::LOG_FILE_VAR;
use atlassian_mcp::config::{
    normalize_host, API_TOKEN_VAR, CONFLUENCE_HOST_VAR, JIRA_HOST_VAR, REQUIRED_ENV_VARS,
};
use std::path::Path;
use url::Url;

/// Check names constants to avoid typos and improve maintainability
pub mod check_names {
    pub const INSTALLATION: &str = "Installation";
    pub const LOG_DESTINATION: &str = "Log destination";
    pub const JIRA_URL: &str = "Jira URL";
    pub const CONFLUENCE_URL: &str = "Confluence URL";
}

/// Report the binary version and build type
pub fn check_installation(checks: &mut Vec<Check>) {
    let build_info = if cfg!(debug_assertions) {
        "debug build"
    } else {
        "release build"
    };

    checks.push(Check::ok(
        check_names::INSTALLATION,
        CheckCategory::System,
        format!("atlassian-mcp v{} ({build_info})", atlassian_mcp::VERSION),
    ));
}

/// Check where logs will be written
///
/// A log file whose directory cannot be created is only a warning: the server
/// falls back to stderr.
pub fn check_log_destination<F>(lookup: &F, checks: &mut Vec<Check>)
where
    F: Fn(&str) -> Option<String>,
{
    let name = check_names::LOG_DESTINATION;
    let Some(file) = lookup(LOG_FILE_VAR).filter(|value| !value.trim().is_empty()) else {
        checks.push(Check::ok(name, CheckCategory::System, "stderr"));
        return;
    };

    let blocked_by = Path::new(&file)
        .parent()
        .filter(|dir| dir.exists() && !dir.is_dir())
        .map(|dir| dir.display().to_string());
    let check = match blocked_by {
        Some(dir) => Check::warning(
            name,
            CheckCategory::System,
            format!("{dir} is not a directory, logs will go to stderr"),
            format!("Point {LOG_FILE_VAR} at a file inside an existing directory"),
        ),
        None => Check::ok(name, CheckCategory::System, file),
    };
    checks.push(check);
}

/// Check that every required variable is set and not blank
///
/// The API token is reported as set or missing, never printed.
pub fn check_environment<F>(lookup: &F, checks: &mut Vec<Check>)
where
    F: Fn(&str) -> Option<String>,
{
    for name in REQUIRED_ENV_VARS {
        let check = match lookup(name).filter(|value| !value.trim().is_empty()) {
            Some(_) if name == API_TOKEN_VAR => {
                Check::ok(name, CheckCategory::Environment, "set (value hidden)")
            }
            Some(value) => Check::ok(name, CheckCategory::Environment, value),
            None => Check::error(
                name,
                CheckCategory::Environment,
                "not set",
                format!("export {name}=..."),
            ),
        };
        checks.push(check);
    }
}

/// Check that each configured host forms a usable base URL
///
/// Unset hosts are skipped; [`check_environment`] already reports them.
pub fn check_hosts<F>(lookup: &F, checks: &mut Vec<Check>)
where
    F: Fn(&str) -> Option<String>,
{
    let hosts = [
        (check_names::JIRA_URL, JIRA_HOST_VAR),
        (check_names::CONFLUENCE_URL, CONFLUENCE_HOST_VAR),
    ];

    for (check_name, var) in hosts {
        let Some(host) = lookup(var).filter(|value| !value.trim().is_empty()) else {
            continue;
        };
        checks.push(check_host(check_name, var, &host));
    }
}

fn check_host(name: &str, var: &str, host: &str) -> Check {
    let base_url = normalize_host(host);
    let example_fix = format!("Set {var} to a host name such as acme.atlassian.net");

    match Url::parse(&base_url) {
        Ok(url) if url.host_str().is_none() => Check::error(
            name,
            CheckCategory::Hosts,
            format!("{base_url} has no host"),
            example_fix,
        ),
        Ok(url) if url.scheme() == "http" => Check::warning(
            name,
            CheckCategory::Hosts,
            format!("{base_url} sends credentials without TLS"),
            format!("Use an https:// URL or a bare host name for {var}"),
        ),
        Ok(_) => Check::ok(name, CheckCategory::Hosts, base_url),
        Err(e) => Check::error(
            name,
            CheckCategory::Hosts,
            format!("{base_url} is not a valid URL: {e}"),
            example_fix,
        ),
    }
}
