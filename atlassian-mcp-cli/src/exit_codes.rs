//! Exit code constants for CLI commands
//!
//! These constants define the standard exit codes used throughout the application:
//! - 0: Success
//! - 1: Warnings, or the server stopped abnormally
//! - 2: Configuration errors or failed checks

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Warnings found, or the server stopped abnormally
pub const EXIT_WARNING: i32 = 1;

/// Configuration errors or failed checks
pub const EXIT_ERROR: i32 = 2;
