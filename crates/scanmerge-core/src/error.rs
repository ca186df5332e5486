// Rust guideline compliant 2026-10-16

//! Error types for the Scanmerge core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Scanmerge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Scanmerge operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input file missing or unreadable.
    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be written.
    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON or does not deserialize into the expected shape.
    #[error("cannot parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A required top-level key is absent.
    #[error("{} has no `{key}` key", path.display())]
    MissingKey { path: PathBuf, key: &'static str },

    /// Top-level value has the wrong JSON type.
    #[error("unexpected document shape in {}: {message}", path.display())]
    Shape { path: PathBuf, message: String },

    /// A paired pose entry is not an object with `translation` and `rotation`.
    #[error("pose record {index} is malformed")]
    InvalidPose {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A paired scan record lacks a field under the `require` policy.
    #[error("scan record {index} has no `{field}` field")]
    MissingField { index: usize, field: &'static str },

    /// Output serialization failed.
    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),
}
