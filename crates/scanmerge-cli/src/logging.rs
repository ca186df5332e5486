// Rust guideline compliant 2026-10-16

//! Tracing setup for the `scanmerge` binary.

use std::fs::OpenOptions;
use std::path::PathBuf;
use thiserror::Error;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Logging options taken from the command line.
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Logging level.
    pub level: String,
    /// Optional log file path; JSON lines are appended there instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

/// Logging setup errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Log file could not be opened.
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid log level provided.
    #[error("invalid log level: {0}")]
    InvalidLevel(String),
}

/// Installs the global tracing subscriber.
///
/// Returns the appender guard when logging to a file; keep it alive until exit
/// so buffered lines are flushed.
///
/// # Errors
///
/// Returns an error if the level is unknown or the log file cannot be opened.
pub fn init_logging(options: &LogOptions) -> Result<Option<WorkerGuard>, LoggingError> {
    let level = parse_log_level(&options.level)?;

    if let Some(path) = &options.file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

/// Parses a level name, case-insensitively.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidLevel`] for unknown names.
pub fn parse_log_level(level: &str) -> Result<Level, LoggingError> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(LoggingError::InvalidLevel(other.to_string())),
    }
}
