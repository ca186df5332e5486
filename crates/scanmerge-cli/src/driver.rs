// Rust guideline compliant 2026-10-16

//! Merge driver: reads both inputs, merges, writes the result.

use anyhow::{Context, Result};
use scanmerge_core::{merge_with_policy, read_poses, read_scans, write_scans, Config, MergeReport};

/// Runs a full merge as described by `config`.
///
/// Both inputs are read before anything is written, so any read, parse, or
/// field-policy failure leaves the output path untouched.
///
/// # Returns
///
/// Counts describing the merge.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - Either input cannot be read or parsed
/// - The pose document has no `scans` key
/// - The field policy rejects a scan record
/// - A paired pose entry is malformed
/// - The output cannot be written
pub fn run_merge(config: &Config) -> Result<MergeReport> {
    config.validate()?;

    let scans = read_scans(&config.scans_path)?;
    let poses = read_poses(&config.poses_path)?;
    tracing::info!(
        scans = scans.len(),
        poses = poses.len(),
        policy = ?config.field_policy,
        "loaded inputs"
    );

    let (merged, report) = merge_with_policy(scans, &poses, config.field_policy)
        .with_context(|| {
            format!(
                "cannot merge {} into {}",
                config.poses_path.display(),
                config.scans_path.display()
            )
        })?;

    if report.passthrough > 0 {
        tracing::info!(
            passthrough = report.passthrough,
            "more scans than poses; trailing scans left unchanged"
        );
    }
    if report.unused_poses > 0 {
        tracing::info!(
            unused = report.unused_poses,
            "more poses than scans; trailing poses ignored"
        );
    }

    write_scans(&config.output_path, &merged, config.indent)?;
    tracing::info!(
        output = %config.output_path.display(),
        overwritten = report.overwritten,
        "merge complete"
    );

    Ok(report)
}

/// One-line human summary of a merge.
pub fn summary(report: &MergeReport) -> String {
    format!(
        "{} of {} scans updated from {} poses ({} unchanged, {} poses unused)",
        report.overwritten, report.scans, report.poses, report.passthrough, report.unused_poses
    )
}
