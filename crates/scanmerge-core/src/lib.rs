// Rust guideline compliant 2026-10-16

//! Scanmerge Core Library
//!
//! This crate provides the pieces behind the `scanmerge` tool:
//! - Data models (ScanRecord, PoseRecord, PoseCollection)
//! - Positional merge of pose estimates into scan records
//! - JSON document read/write with key order preserved
//! - Layered configuration (defaults, TOML file, environment)
//! - Error types and result handling

pub mod config;
pub mod document;
pub mod error;
pub mod merge;
pub mod models;

pub use config::{Config, FieldPolicy};
pub use document::{read_poses, read_scans, write_scans};
pub use error::{Error, Result};
pub use merge::{merge, merge_with_policy, merge_with_report, pairing_bound, MergeReport};
pub use models::{PoseCollection, PoseRecord, ScanRecord};
