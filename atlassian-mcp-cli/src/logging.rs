//! Logging setup
//!
//! Stdout carries the MCP protocol, so logs only ever go to stderr or to the
//! file named by [`LOG_FILE_VAR`].

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Environment variable naming a file to append logs to
pub const LOG_FILE_VAR: &str = "ATLASSIAN_MCP_LOG_FILE";

/// A thread-safe writer wrapper that flushes and syncs every write.
///
/// Log lines written while the server is running must be on disk even if the
/// client kills the process without warning.
///
/// # Example
///
/// ```no_run
/// use std::io::Write;
/// use std::sync::{Arc, Mutex};
/// use std::fs::File;
/// use atlassian_mcp_cli::logging::FileWriterGuard;
///
/// let file = File::create("log.txt").unwrap();
/// let shared_file = Arc::new(Mutex::new(file));
/// let mut guard = FileWriterGuard::new(shared_file);
///
/// guard.write_all(b"Log message\n").unwrap();
/// ```
pub struct FileWriterGuard {
    file: Arc<Mutex<File>>,
}

impl FileWriterGuard {
    /// Creates a new `FileWriterGuard` wrapping the given file.
    pub fn new(file: Arc<Mutex<File>>) -> Self {
        Self { file }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, File> {
        self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::io::Write for FileWriterGuard {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut file = self.lock();
        let result = file.write(buf)?;
        file.flush()?;
        file.sync_all()?;
        Ok(result)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let mut file = self.lock();
        file.flush()?;
        file.sync_all()?;
        Ok(())
    }
}

/// Log level chosen from the global flags
///
/// `--quiet` wins over `--debug`, which wins over `--verbose`.
pub fn log_level(quiet: bool, debug: bool, verbose: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if debug {
        Level::DEBUG
    } else if verbose {
        Level::TRACE
    } else {
        Level::INFO
    }
}

/// Log file requested through the environment, if any
pub fn log_file_from_env() -> Option<PathBuf> {
    std::env::var_os(LOG_FILE_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber
///
/// `RUST_LOG` overrides `level` when set. If the log file cannot be opened the
/// subscriber falls back to stderr and says so.
pub fn init_logging(level: Level, log_file: Option<&Path>) {
    let filter = || {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(level).into())
            .from_env_lossy()
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter())
            .init();
        return;
    };

    match open_log_file(path) {
        Ok(file) => {
            let shared = Arc::new(Mutex::new(file));
            tracing_subscriber::fmt()
                .with_writer(move || FileWriterGuard::new(shared.clone()))
                .with_env_filter(filter())
                .with_ansi(false)
                .init();
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter())
                .init();
            tracing::warn!("Failed to open log file {}, using stderr: {}", path.display(), e);
        }
    }
}
