// Rust guideline compliant 2026-10-16

//! Configuration management for Scanmerge.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the scan source path.
pub const ENV_SCANS: &str = "SCANMERGE_SCANS";
/// Environment variable overriding the pose source path.
pub const ENV_POSES: &str = "SCANMERGE_POSES";
/// Environment variable overriding the merged output path.
pub const ENV_OUTPUT: &str = "SCANMERGE_OUTPUT";
/// Environment variable overriding the output indentation.
pub const ENV_INDENT: &str = "SCANMERGE_INDENT";
/// Environment variable overriding the field policy.
pub const ENV_FIELD_POLICY: &str = "SCANMERGE_FIELD_POLICY";

const MAX_INDENT: usize = 16;

/// What to do when a paired scan record lacks `pos` or `rot_quat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldPolicy {
    /// Append the missing field to the record.
    #[default]
    Insert,
    /// Fail the merge.
    Require,
}

impl std::str::FromStr for FieldPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "insert" => Ok(Self::Insert),
            "require" => Ok(Self::Require),
            other => Err(Error::Config(format!(
                "field policy must be insert or require, got {other}"
            ))),
        }
    }
}

/// Configuration for a merge run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// JSON array of scan records.
    #[serde(default = "default_scans_path")]
    pub scans_path: PathBuf,

    /// JSON object with a `scans` array of poses.
    #[serde(default = "default_poses_path")]
    pub poses_path: PathBuf,

    /// Where the merged array is written.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Spaces per indentation level in the output.
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Handling of scans missing pose fields.
    #[serde(default)]
    pub field_policy: FieldPolicy,
}

fn default_scans_path() -> PathBuf {
    PathBuf::from("api.json")
}

fn default_poses_path() -> PathBuf {
    PathBuf::from("new.json")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("merged.json")
}

fn default_indent() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scans_path: default_scans_path(),
            poses_path: default_poses_path(),
            output_path: default_output_path(),
            indent: default_indent(),
            field_policy: FieldPolicy::default(),
        }
    }
}

impl Config {
    /// Loads configuration from an optional file and the process environment.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, if one is given
    /// 3. Environment variables with `SCANMERGE_` prefix
    ///
    /// The result is not validated yet; command-line overrides usually follow,
    /// then [`Config::validate`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The given file cannot be read
    /// - The file contains invalid TOML
    /// - An environment variable holds an invalid value
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Reads a TOML configuration file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::Config(format!("invalid config file {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Applies `SCANMERGE_*` overrides using `lookup` to read variables.
    ///
    /// Supported variables:
    /// - `SCANMERGE_SCANS` - Scan source path
    /// - `SCANMERGE_POSES` - Pose source path
    /// - `SCANMERGE_OUTPUT` - Merged output path
    /// - `SCANMERGE_INDENT` - Output indentation width
    /// - `SCANMERGE_FIELD_POLICY` - `insert` or `require`
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_SCANS) {
            self.scans_path = PathBuf::from(val);
        }

        if let Some(val) = lookup(ENV_POSES) {
            self.poses_path = PathBuf::from(val);
        }

        if let Some(val) = lookup(ENV_OUTPUT) {
            self.output_path = PathBuf::from(val);
        }

        if let Some(val) = lookup(ENV_INDENT) {
            self.indent = val.parse().map_err(|_| {
                Error::Config(format!("{ENV_INDENT} must be a non-negative number"))
            })?;
        }

        if let Some(val) = lookup(ENV_FIELD_POLICY) {
            self.field_policy = val.parse()?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - indent exceeds 16
    /// - the output path resolves to the same file as either input path
    pub fn validate(&self) -> Result<()> {
        if self.indent > MAX_INDENT {
            return Err(Error::Config(format!(
                "indent must be 0-{MAX_INDENT}, got {}",
                self.indent
            )));
        }

        let output = resolve_path(&self.output_path);
        if output == resolve_path(&self.scans_path) || output == resolve_path(&self.poses_path) {
            return Err(Error::Config(format!(
                "output path {} would overwrite an input",
                self.output_path.display()
            )));
        }

        Ok(())
    }
}

/// Canonical form of `path`, falling back to its canonical parent joined with
/// the file name when the file does not exist yet.
fn resolve_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = path.canonicalize() {
        return resolved;
    }
    let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
        return path.to_path_buf();
    };
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    parent
        .canonicalize()
        .map(|dir| dir.join(name))
        .unwrap_or_else(|_| path.to_path_buf())
}
