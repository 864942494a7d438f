//! Doctor module for Atlassian MCP diagnostics
//!
//! Checks the configuration `serve` would start with, without contacting
//! Jira or Confluence.
//!
//! # Usage
//!
//! ```no_run
//! use atlassian_mcp_cli::doctor::Doctor;
//!
//! let mut doctor = Doctor::new();
//! let exit_code = doctor.run_diagnostics();
//! ```
//!
//! The doctor returns exit codes:
//! - 0: All checks passed
//! - 1: Some warnings detected
//! - 2: Errors detected

use colored::*;

// Re-export types from submodules
pub use types::*;

pub mod checks;
pub mod types;

/// Main diagnostic tool for Atlassian MCP configuration checks
///
/// The Doctor struct accumulates diagnostic results and provides a summary
/// of the configuration and any potential issues.
pub struct Doctor {
    checks: Vec<Check>,
}

impl Doctor {
    /// Create a new Doctor instance for running diagnostics
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Run all diagnostic checks against the process environment and print them
    ///
    /// # Returns
    ///
    /// Returns an exit code:
    /// - 0: All checks passed
    /// - 1: Warnings detected
    /// - 2: Errors detected
    pub fn run_diagnostics(&mut self) -> i32 {
        println!("{}", "Atlassian MCP Doctor".bold().blue());
        println!("{}", "Running diagnostics...".dimmed());
        println!();

        self.collect(|name| std::env::var(name).ok());
        self.print_results();
        self.get_exit_code()
    }

    /// Run every check through the given variable lookup
    pub fn collect<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        checks::check_installation(&mut self.checks);
        checks::check_log_destination(&lookup, &mut self.checks);
        checks::check_environment(&lookup, &mut self.checks);
        checks::check_hosts(&lookup, &mut self.checks);
    }

    /// Checks collected so far
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Print the checks grouped by category, then a one-line summary
    pub fn print_results(&self) {
        let use_color = crate::cli::Cli::should_use_color();

        for category in CheckCategory::ALL {
            let mut checks = self.checks.iter().filter(|c| c.category == category).peekable();
            if checks.peek().is_none() {
                continue;
            }
            println!("{}", paint(category.title(), use_color, |s| s.bold().yellow()));
            for check in checks {
                print_check(check, use_color);
            }
            println!();
        }

        println!("{}", paint("Summary:", use_color, |s| s.bold().green()));
        println!("  {}", self.summary());
    }

    /// Summary line, e.g. `3 checks passed, 1 warnings, 2 errors`
    pub fn summary(&self) -> String {
        let count = |status| self.checks.iter().filter(|c| c.status == status).count();
        let (ok, warnings, errors) = (
            count(CheckStatus::Ok),
            count(CheckStatus::Warning),
            count(CheckStatus::Error),
        );

        match (warnings, errors) {
            (0, 0) => "All checks passed!".to_string(),
            (_, 0) => format!("{ok} checks passed, {warnings} warnings"),
            _ => format!("{ok} checks passed, {warnings} warnings, {errors} errors"),
        }
    }

    /// Exit code of the worst check: 0, 1 or 2
    pub fn get_exit_code(&self) -> i32 {
        self.checks
            .iter()
            .map(|c| c.status)
            .max()
            .unwrap_or(CheckStatus::Ok)
            .exit_code()
    }
}

impl Default for Doctor {
    fn default() -> Self {
        Self::new()
    }
}

fn paint(text: &str, use_color: bool, style: impl Fn(&str) -> ColoredString) -> String {
    if use_color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

fn print_check(check: &Check, use_color: bool) {
    let symbol = paint(check.status.symbol(), use_color, |s| match check.status {
        CheckStatus::Ok => s.green(),
        CheckStatus::Warning => s.yellow(),
        CheckStatus::Error => s.red(),
    });
    let name = paint(&check.name, use_color, |s| s.bold());
    println!("  {symbol} {name} - {}", check.message);

    if let Some(fix) = &check.fix {
        println!("    {}", paint(&format!("→ {fix}"), use_color, |s| s.dimmed()));
    }
}
