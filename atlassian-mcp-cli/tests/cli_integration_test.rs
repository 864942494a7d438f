//! Integration tests for the atlassian-mcp binary
//!
//! The process environment is cleared for every run so the developer's own
//! Atlassian credentials never leak into a test.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SECRET: &str = "do-not-print-this-token";

fn atlassian_mcp() -> Command {
    let mut cmd = Command::cargo_bin("atlassian-mcp").unwrap();
    cmd.env_clear();
    cmd
}

fn with_complete_env(cmd: &mut Command) -> &mut Command {
    cmd.env("JIRA_HOST", "acme.atlassian.net")
        .env("CONFLUENCE_HOST", "https://acme.atlassian.net/")
        .env("ATLASSIAN_USERNAME", "bot@acme.test")
        .env("ATLASSIAN_API_TOKEN", SECRET)
}

#[test]
fn test_help_lists_subcommands() {
    atlassian_mcp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("doctor"));
}

#[test]
fn test_no_subcommand_prints_help() {
    atlassian_mcp()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_subcommand_fails() {
    atlassian_mcp().arg("publish").assert().failure();
}

#[test]
fn test_serve_without_environment_fails() -> Result<()> {
    let output = atlassian_mcp().arg("serve").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Missing required environment variable: JIRA_HOST"),
        "stderr should name the missing variable: {stderr}"
    );
    assert!(output.stdout.is_empty(), "stdout is reserved for the protocol");
    Ok(())
}

#[test]
fn test_serve_names_each_missing_variable() -> Result<()> {
    let all = [
        ("JIRA_HOST", "acme.atlassian.net"),
        ("CONFLUENCE_HOST", "acme.atlassian.net"),
        ("ATLASSIAN_USERNAME", "bot@acme.test"),
        ("ATLASSIAN_API_TOKEN", SECRET),
    ];

    for (missing, _) in all {
        let mut cmd = atlassian_mcp();
        for (name, value) in all.iter().filter(|(name, _)| *name != missing) {
            cmd.env(name, value);
        }

        let output = cmd.arg("serve").output()?;
        assert_eq!(output.status.code(), Some(2), "missing {missing}");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains(missing), "stderr should name {missing}: {stderr}");
    }
    Ok(())
}

#[test]
fn test_serve_treats_blank_variable_as_missing() {
    let mut cmd = atlassian_mcp();
    with_complete_env(&mut cmd)
        .env("ATLASSIAN_USERNAME", "  ")
        .arg("serve")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ATLASSIAN_USERNAME"));
}

#[test]
fn test_doctor_without_environment_reports_errors() {
    atlassian_mcp()
        .arg("doctor")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("JIRA_HOST"))
        .stdout(predicate::str::contains("ATLASSIAN_API_TOKEN"))
        .stdout(predicate::str::contains("not set"));
}

#[test]
fn test_doctor_with_complete_environment_passes() {
    let mut cmd = atlassian_mcp();
    with_complete_env(&mut cmd)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://acme.atlassian.net"))
        .stdout(predicate::str::contains("All checks passed"))
        .stdout(predicate::str::contains(SECRET).not());
}

#[test]
fn test_doctor_warns_on_plain_http() {
    let mut cmd = atlassian_mcp();
    with_complete_env(&mut cmd)
        .env("JIRA_HOST", "http://jira.internal")
        .arg("doctor")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("without TLS"));
}

#[test]
fn test_logs_go_to_configured_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let log_file = temp_dir.path().join("logs").join("atlassian-mcp.log");

    atlassian_mcp()
        .env("ATLASSIAN_MCP_LOG_FILE", &log_file)
        .args(["--debug", "doctor"])
        .assert()
        .code(2);

    let logs = std::fs::read_to_string(&log_file)?;
    assert!(logs.contains("Running diagnostics"), "log file: {logs}");
    Ok(())
}
