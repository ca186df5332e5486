// Rust guideline compliant 2026-10-16

//! Positional merge of pose estimates into scan records.
//!
//! Scan `i` takes its `pos` and `rot_quat` from pose `i`. Pairing stops at the
//! shorter of the two collections: trailing scans pass through untouched and
//! trailing poses are ignored.

use crate::config::FieldPolicy;
use crate::models::{PoseCollection, ScanRecord, POS_KEY, ROT_QUAT_KEY};
use crate::{Error, Result};

/// Counts describing what a merge did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Number of scan records in the input (and output).
    pub scans: usize,
    /// Number of pose records available.
    pub poses: usize,
    /// Scan records whose pose fields were overwritten.
    pub overwritten: usize,
    /// Scan records left unchanged for lack of a pose.
    pub passthrough: usize,
    /// Pose records with no scan to pair with.
    pub unused_poses: usize,
    /// `pos`/`rot_quat` fields created because the scan lacked them.
    pub inserted_fields: usize,
}

/// Number of index positions present in both collections.
pub fn pairing_bound(scans: usize, poses: usize) -> usize {
    scans.min(poses)
}

/// Overwrites each scan's pose fields from the pose at the same index.
///
/// Missing `pos`/`rot_quat` keys are appended to the record. Only pose entries
/// below the pairing bound are decoded; the rest are never looked at.
///
/// # Arguments
///
/// * `scans` - Scan records in pairing order
/// * `poses` - Pose document whose `scans` list supplies the new values
///
/// # Returns
///
/// The scan records, same length and order as the input.
///
/// # Errors
///
/// Returns [`Error::InvalidPose`] if a paired pose entry lacks `translation`
/// or `rotation`.
pub fn merge(scans: Vec<ScanRecord>, poses: &PoseCollection) -> Result<Vec<ScanRecord>> {
    merge_with_report(scans, poses).map(|(merged, _)| merged)
}

/// Same as [`merge`], also returning a [`MergeReport`].
///
/// # Errors
///
/// Returns [`Error::InvalidPose`] if a paired pose entry is malformed.
pub fn merge_with_report(
    mut scans: Vec<ScanRecord>,
    poses: &PoseCollection,
) -> Result<(Vec<ScanRecord>, MergeReport)> {
    let mut report = new_report(scans.len(), poses.len());

    for (index, scan) in scans.iter_mut().take(report.overwritten).enumerate() {
        let Some(pose) = poses.pose_at(index) else {
            break;
        };
        let pose = pose?;
        if scan.set_pos(pose.translation) {
            report.inserted_fields += 1;
        }
        if scan.set_rot_quat(pose.rotation) {
            report.inserted_fields += 1;
        }
    }

    Ok((scans, report))
}

/// Merges under an explicit [`FieldPolicy`].
///
/// # Errors
///
/// Under [`FieldPolicy::Require`], returns [`Error::MissingField`] for the first
/// paired scan lacking `pos` or `rot_quat`. Any policy returns
/// [`Error::InvalidPose`] for a malformed paired pose entry.
pub fn merge_with_policy(
    scans: Vec<ScanRecord>,
    poses: &PoseCollection,
    policy: FieldPolicy,
) -> Result<(Vec<ScanRecord>, MergeReport)> {
    if policy == FieldPolicy::Require {
        let paired = pairing_bound(scans.len(), poses.len());
        for (index, scan) in scans.iter().take(paired).enumerate() {
            if scan.pos().is_none() {
                return Err(Error::MissingField {
                    index,
                    field: POS_KEY,
                });
            }
            if scan.rot_quat().is_none() {
                return Err(Error::MissingField {
                    index,
                    field: ROT_QUAT_KEY,
                });
            }
        }
    }

    let (merged, report) = merge_with_report(scans, poses)?;
    if report.inserted_fields > 0 {
        tracing::warn!(
            inserted = report.inserted_fields,
            "scan records were missing pose fields; appended them"
        );
    }
    Ok((merged, report))
}

fn new_report(scans: usize, poses: usize) -> MergeReport {
    let paired = pairing_bound(scans, poses);
    MergeReport {
        scans,
        poses,
        overwritten: paired,
        passthrough: scans - paired,
        unused_poses: poses - paired,
        inserted_fields: 0,
    }
}
