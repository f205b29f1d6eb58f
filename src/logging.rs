//! Logging setup for IntelliSQL.
//!
//! The interactive assistant owns the terminal, so its tracing output goes to
//! a file. One-shot commands write to stderr, leaving stdout for SQL and
//! result tables. `RUST_LOG` filters both (default `info`).

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log file location.
pub const LOG_FILE_ENV: &str = "INTELLISQL_LOG";

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// A file under the platform state directory (interactive mode).
    File,
    /// Standard error (one-shot commands).
    Stderr,
}

impl LogTarget {
    /// True when log lines never reach the terminal.
    pub fn is_file(self) -> bool {
        self == Self::File
    }
}

/// Installs the global subscriber for `target`.
///
/// Returns the log file path when logging to a file. If the file cannot be
/// created, a warning is printed and logging stays off rather than falling
/// back to the terminal.
pub fn init(target: LogTarget) -> Option<PathBuf> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            None
        }
        LogTarget::File => {
            let path = log_file_path();
            let file = match open_log_file(&path) {
                Ok(file) => file,
                Err(e) => {
                    eprintln!("Warning: logging disabled, cannot open {}: {e}", path.display());
                    return None;
                }
            };

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .with_ansi(false)
                .init();
            Some(path)
        }
    }
}

/// Creates the log file, truncating the previous session's log.
fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

/// Resolves the log file path.
///
/// `INTELLISQL_LOG` wins; otherwise `intellisql/intellisql.log` under the
/// state directory, the config directory, or the temp directory, whichever
/// the platform provides first.
pub fn log_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os(LOG_FILE_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    dirs::state_dir()
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("intellisql"))
        .unwrap_or_else(std::env::temp_dir)
        .join("intellisql.log")
}
