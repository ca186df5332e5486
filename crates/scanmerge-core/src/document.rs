// Rust guideline compliant 2026-10-16

//! Reading and writing scan and pose JSON documents.
//!
//! Each input is read fully into memory in one scoped acquisition. Output is
//! written to a sibling temp file first and renamed into place, so a failed run
//! never leaves a partial merged file behind.

use crate::models::{PoseCollection, ScanRecord};
use crate::{Error, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::ffi::OsString;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Top-level key of the pose document that holds the pose list.
pub const POSES_KEY: &str = "scans";

/// Reads a JSON array of scan records.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The content is not valid JSON
/// - The top-level value is not an array of objects
pub fn read_scans(path: &Path) -> Result<Vec<ScanRecord>> {
    let value = read_json(path)?;
    if !value.is_array() {
        return Err(Error::Shape {
            path: path.to_path_buf(),
            message: format!("expected an array of scan records, found {}", kind(&value)),
        });
    }

    let scans: Vec<ScanRecord> = serde_json::from_value(value).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = scans.len(), "read scan records");
    Ok(scans)
}

/// Reads a pose document: an object with a `scans` array of poses.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The content is not valid JSON
/// - The top-level value is not an object
/// - The `scans` key is absent ([`Error::MissingKey`])
/// - The `scans` value is not an array
///
/// Individual entries are not decoded here; see [`PoseCollection::pose_at`].
pub fn read_poses(path: &Path) -> Result<PoseCollection> {
    let value = read_json(path)?;
    let Some(object) = value.as_object() else {
        return Err(Error::Shape {
            path: path.to_path_buf(),
            message: format!("expected an object with a `{POSES_KEY}` key, found {}", kind(&value)),
        });
    };
    if !object.contains_key(POSES_KEY) {
        return Err(Error::MissingKey {
            path: path.to_path_buf(),
            key: POSES_KEY,
        });
    }

    let poses: PoseCollection = serde_json::from_value(value).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = poses.len(), "read pose records");
    Ok(poses)
}

/// Writes scan records as an indented JSON array.
///
/// # Arguments
///
/// * `path` - Destination file, replaced atomically
/// * `scans` - Records to write
/// * `indent` - Spaces per nesting level
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_scans(path: &Path, scans: &[ScanRecord], indent: usize) -> Result<()> {
    let buf = to_pretty_json(scans, indent)?;
    let temp_path = temp_path_for(path);

    let written = File::create(&temp_path)
        .and_then(|mut file| {
            file.write_all(&buf)?;
            file.sync_all()
        })
        .and_then(|()| std::fs::rename(&temp_path, path));

    if let Err(source) = written {
        let _ = std::fs::remove_file(&temp_path);
        return Err(Error::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    tracing::debug!(path = %path.display(), count = scans.len(), "wrote merged records");
    Ok(())
}

/// Serializes `value` with `indent` spaces per level.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<Vec<u8>> {
    let indent = vec![b' '; indent];
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(&indent);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

fn read_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
