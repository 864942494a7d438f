//! Error handling for the Atlassian MCP CLI
//!
//! Errors keep their source chain and carry the exit code the process should
//! end with.

use std::error::Error;
use std::fmt;

use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};

/// CLI-specific result type that preserves error information
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type that includes both error information and suggested exit code
#[derive(Debug)]
pub struct CliError {
    /// Top-level message shown to the user
    pub message: String,
    /// Exit code the process should end with
    pub exit_code: i32,
    /// Underlying cause, if any
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl CliError {
    /// Create a new CLI error with a message and exit code
    pub fn new(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
            source: None,
        }
    }

    /// Create a CLI error from another error with a specific exit code
    pub fn from_error<E: Error + Send + Sync + 'static>(error: E, exit_code: i32) -> Self {
        let message = error.to_string();
        Self {
            message,
            exit_code,
            source: Some(Box::new(error)),
        }
    }

    /// Create a CLI error with exit code 2 (configuration error)
    pub fn configuration<E: Error + Send + Sync + 'static>(error: E) -> Self {
        Self::from_error(error, EXIT_ERROR)
    }

    /// Get the full error chain as a formatted string
    ///
    /// Causes whose text is already part of the message are skipped.
    pub fn full_chain(&self) -> String {
        let mut result = self.message.clone();

        let mut current_source = self.source().and_then(|e| e.source());
        while let Some(err) = current_source {
            let cause = err.to_string();
            if !result.contains(&cause) {
                result.push_str(&format!("\n  Caused by: {cause}"));
            }
            current_source = err.source();
        }

        result
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

/// Extension trait for converting results to CLI results
pub trait IntoCliResult<T> {
    /// Attach exit code 2
    fn cli_configuration_error(self) -> CliResult<T>;
}

impl<T, E: Error + Send + Sync + 'static> IntoCliResult<T> for Result<T, E> {
    fn cli_configuration_error(self) -> CliResult<T> {
        self.map_err(CliError::configuration)
    }
}

/// Convert a CliResult to an exit code, printing the full error chain if needed
pub fn handle_cli_result<T>(result: CliResult<T>) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.full_chain());
            e.exit_code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes::EXIT_WARNING;
    use atlassian_mcp::{AtlassianMcpError, ConfigError};

    #[test]
    fn test_configuration_error_exit_code() {
        let result: Result<(), ConfigError> = Err(ConfigError::MissingVariable("JIRA_HOST"));
        let error = result.cli_configuration_error().unwrap_err();
        assert_eq!(error.exit_code, EXIT_ERROR);
        assert!(error.to_string().contains("JIRA_HOST"));
    }

    #[test]
    fn test_full_chain_skips_repeated_causes() {
        let inner: AtlassianMcpError = ConfigError::MissingVariable("CONFLUENCE_HOST").into();
        let error = CliError::from_error(inner, EXIT_WARNING);

        assert_eq!(
            error.full_chain(),
            "Configuration error: Missing required environment variable: CONFLUENCE_HOST"
        );
    }

    #[derive(Debug)]
    struct OpenLogError(std::io::Error);

    impl fmt::Display for OpenLogError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Failed to open log file")
        }
    }

    impl Error for OpenLogError {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_full_chain_lists_new_causes() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let error = CliError::from_error(OpenLogError(io), EXIT_WARNING);
        assert_eq!(
            error.full_chain(),
            "Failed to open log file\n  Caused by: permission denied"
        );
    }

    #[test]
    fn test_handle_cli_result() {
        assert_eq!(handle_cli_result::<()>(Ok(())), EXIT_SUCCESS);
        assert_eq!(
            handle_cli_result::<()>(Err(CliError::new("boom", EXIT_WARNING))),
            EXIT_WARNING
        );
    }
}
