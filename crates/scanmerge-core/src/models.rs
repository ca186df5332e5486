// Rust guideline compliant 2026-10-16

//! Core data models for scan and pose documents.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding a scan's position.
pub const POS_KEY: &str = "pos";
/// Key holding a scan's orientation quaternion.
pub const ROT_QUAT_KEY: &str = "rot_quat";

/// A single capture from the scan source.
///
/// Backed by an ordered JSON object so that every key, known or not, keeps
/// its position when the record is written back out. `pos` and `rot_quat`
/// are reached through typed accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanRecord {
    fields: Map<String, Value>,
}

impl ScanRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Position vector, if present.
    pub fn pos(&self) -> Option<&Value> {
        self.fields.get(POS_KEY)
    }

    /// Orientation quaternion, if present.
    pub fn rot_quat(&self) -> Option<&Value> {
        self.fields.get(ROT_QUAT_KEY)
    }

    /// Replaces the position in place, appending the key if it was absent.
    ///
    /// Returns `true` when the key had to be created.
    pub fn set_pos(&mut self, pos: Value) -> bool {
        self.fields.insert(POS_KEY.to_string(), pos).is_none()
    }

    /// Replaces the orientation in place, appending the key if it was absent.
    ///
    /// Returns `true` when the key had to be created.
    pub fn set_rot_quat(&mut self, rot_quat: Value) -> bool {
        self.fields.insert(ROT_QUAT_KEY.to_string(), rot_quat).is_none()
    }

    /// Looks up any field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Field names in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Underlying ordered map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for ScanRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// A pose estimate from the secondary source.
///
/// Unknown keys on the pose entry are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseRecord {
    /// Position vector, copied verbatim into a scan's `pos`.
    pub translation: Value,
    /// Orientation quaternion, copied verbatim into a scan's `rot_quat`.
    pub rotation: Value,
}

impl PoseRecord {
    /// Creates a pose from its two components.
    pub fn new(translation: Value, rotation: Value) -> Self {
        Self {
            translation,
            rotation,
        }
    }
}

impl From<PoseRecord> for Value {
    fn from(pose: PoseRecord) -> Self {
        let mut fields = Map::new();
        fields.insert("translation".to_string(), pose.translation);
        fields.insert("rotation".to_string(), pose.rotation);
        Value::Object(fields)
    }
}

/// The pose source document: an object whose `scans` key lists poses.
///
/// Entries are kept as raw JSON and only decoded into a [`PoseRecord`] when a
/// scan is paired with them, so unpaired trailing entries may have any shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseCollection {
    /// Pose entries in pairing order.
    pub scans: Vec<Value>,
}

impl PoseCollection {
    /// Builds a collection from well-formed poses.
    pub fn new(poses: Vec<PoseRecord>) -> Self {
        Self::from_entries(poses.into_iter().map(Value::from).collect())
    }

    /// Builds a collection from raw pose entries.
    pub fn from_entries(scans: Vec<Value>) -> Self {
        Self { scans }
    }

    /// Decodes the pose at `index`.
    ///
    /// Returns `None` past the end of the list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPose`] if the entry is not an object with
    /// `translation` and `rotation`.
    pub fn pose_at(&self, index: usize) -> Option<Result<PoseRecord>> {
        let entry = self.scans.get(index)?;
        Some(
            PoseRecord::deserialize(entry).map_err(|source| Error::InvalidPose { index, source }),
        )
    }

    /// Number of pose entries.
    pub fn len(&self) -> usize {
        self.scans.len()
    }

    /// Whether there are no pose entries.
    pub fn is_empty(&self) -> bool {
        self.scans.is_empty()
    }
}
