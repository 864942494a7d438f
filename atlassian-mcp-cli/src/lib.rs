//! Atlassian MCP CLI Library
//!
//! This library provides the core functionality for the `atlassian-mcp`
//! binary: command-line definitions, diagnostics, logging and exit codes.

// Re-export modules for use in tests
/// Command-line interface definitions and argument parsing
pub mod cli;
/// Configuration diagnostics
pub mod doctor;
/// Error type carrying an exit code
pub mod error;
/// Exit codes used by the CLI application
pub mod exit_codes;
/// Logging setup
pub mod logging;
