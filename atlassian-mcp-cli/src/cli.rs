use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "atlassian-mcp")]
#[command(version)]
#[command(about = "An MCP server for creating and searching Jira issues and Confluence pages")]
#[command(long_about = "
atlassian-mcp is an MCP (Model Context Protocol) server that exposes four
tools over stdio: create-jira-issue, search-jira-issues,
create-confluence-page and search-confluence.

Configuration is read from the environment:
  JIRA_HOST             Jira host, e.g. acme.atlassian.net
  CONFLUENCE_HOST       Confluence host, e.g. acme.atlassian.net
  ATLASSIAN_USERNAME    Account email used for Basic authentication
  ATLASSIAN_API_TOKEN   API token for that account

Example usage:
  atlassian-mcp serve     # Run as MCP server
  atlassian-mcp doctor    # Check configuration
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server over stdio
    #[command(long_about = "
Runs atlassian-mcp as an MCP server on stdin/stdout. The server will:

- Read Jira and Confluence hosts and credentials from the environment
- Refuse to start if any required variable is missing
- Expose the Jira and Confluence tools via the MCP protocol

Logs go to stderr, or to the file named by ATLASSIAN_MCP_LOG_FILE.

Example:
  atlassian-mcp serve
  # Or configure it as a stdio server in your MCP client
")]
    Serve,
    /// Diagnose configuration issues
    #[command(long_about = "
Checks the configuration the server would start with:

- Each required environment variable is set
- Each host is a valid URL

The API token is never printed.

Exit codes:
  0 - All checks passed
  1 - Warnings found
  2 - Errors found

Example:
  atlassian-mcp doctor
")]
    Doctor,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn is_tty() -> bool {
        io::stdout().is_terminal()
    }

    pub fn should_use_color() -> bool {
        Self::is_tty() && std::env::var("NO_COLOR").is_err()
    }
}
