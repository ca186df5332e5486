// Rust guideline compliant 2026-10-16

//! Tests for reading and writing scan and pose documents.

use scanmerge_core::{merge, read_poses, read_scans, write_scans, Error};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_read_scans_array() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("api.json");
    fs::write(
        &path,
        r#"[{"name": "a", "pos": [0, 0, 0], "rot_quat": [0, 0, 0, 1]}, {"name": "b"}]"#,
    )
    .unwrap();

    let scans = read_scans(&path).unwrap();
    assert_eq!(scans.len(), 2);
    assert!(scans[1].pos().is_none());
}

#[test]
fn test_read_scans_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let result = read_scans(&temp_dir.path().join("absent.json"));
    assert!(matches!(result, Err(Error::Read { .. })));
}

#[test]
fn test_read_scans_invalid_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("api.json");
    fs::write(&path, "[{\"name\": ").unwrap();
    assert!(matches!(read_scans(&path), Err(Error::Parse { .. })));
}

#[test]
fn test_read_scans_rejects_object() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("api.json");
    fs::write(&path, r#"{"scans": []}"#).unwrap();
    assert!(matches!(read_scans(&path), Err(Error::Shape { .. })));
}

#[test]
fn test_read_scans_rejects_non_object_entries() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("api.json");
    fs::write(&path, "[1, 2, 3]").unwrap();
    assert!(matches!(read_scans(&path), Err(Error::Parse { .. })));
}

#[test]
fn test_read_poses_missing_scans_key() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("new.json");
    fs::write(&path, r#"{"frames": []}"#).unwrap();

    let err = read_poses(&path).unwrap_err();
    assert!(matches!(err, Error::MissingKey { key: "scans", .. }));
    assert!(err.to_string().contains("`scans`"));
}

#[test]
fn test_read_poses_rejects_array() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("new.json");
    fs::write(&path, "[]").unwrap();
    assert!(matches!(read_poses(&path), Err(Error::Shape { .. })));
}

#[test]
fn test_read_poses_rejects_non_array_scans() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("new.json");
    fs::write(&path, r#"{"scans": {"translation": [1, 2, 3]}}"#).unwrap();
    let err = read_poses(&path).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert!(err.to_string().starts_with("cannot parse"));
}

#[test]
fn test_incomplete_paired_pose_fails_merge() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let scans_path = temp_dir.path().join("api.json");
    let poses_path = temp_dir.path().join("new.json");
    fs::write(&scans_path, r#"[{"pos": [0, 0, 0], "rot_quat": [0, 0, 0, 1]}]"#).unwrap();
    fs::write(&poses_path, r#"{"scans": [{"translation": [1, 2, 3]}]}"#).unwrap();

    let poses = read_poses(&poses_path).unwrap();
    let err = merge(read_scans(&scans_path).unwrap(), &poses).unwrap_err();
    assert!(matches!(err, Error::InvalidPose { index: 0, .. }));
}

#[test]
fn test_incomplete_trailing_pose_is_ignored() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let scans_path = temp_dir.path().join("api.json");
    let poses_path = temp_dir.path().join("new.json");
    fs::write(&scans_path, r#"[{"pos": [0, 0, 0], "rot_quat": [0, 0, 0, 1]}]"#).unwrap();
    fs::write(
        &poses_path,
        r#"{"scans": [{"translation": [1, 2, 3], "rotation": [0, 1, 0, 0]}, {"note": "dropped frame"}]}"#,
    )
    .unwrap();

    let merged = merge(
        read_scans(&scans_path).unwrap(),
        &read_poses(&poses_path).unwrap(),
    )
    .unwrap();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].pos(), Some(&json!([1, 2, 3])));
    assert_eq!(merged[0].rot_quat(), Some(&json!([0, 1, 0, 0])));
}

#[test]
fn test_number_literals_pass_through_unchanged() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let scans_path = temp_dir.path().join("api.json");
    let poses_path = temp_dir.path().join("new.json");
    let output_path = temp_dir.path().join("merged.json");
    fs::write(
        &scans_path,
        r#"[
            {"id": 123456789012345678901234567890, "scale": 1.50, "range": 1e5, "pos": [0, 0, 0], "rot_quat": [0, 0, 0, 1]},
            {"id": 2, "pos": [0.10, 0.20, 0.30], "rot_quat": [0, 0, 0, 1.0]}
        ]"#,
    )
    .unwrap();
    fs::write(
        &poses_path,
        r#"{"scans": [{"translation": [1.50, 2e3, -0.0], "rotation": [0, 0.7071067811865476, 0, 0.7071067811865476]}]}"#,
    )
    .unwrap();

    let merged = merge(
        read_scans(&scans_path).unwrap(),
        &read_poses(&poses_path).unwrap(),
    )
    .unwrap();
    write_scans(&output_path, &merged, 0).unwrap();

    let content = fs::read_to_string(&output_path).unwrap();
    for literal in [
        "123456789012345678901234567890",
        "\"scale\": 1.50",
        "\"range\": 1e5",
        "1.50",
        "2e3",
        "-0.0",
        "0.7071067811865476",
        "0.10",
        "1.0",
    ] {
        assert!(content.contains(literal), "missing {} in {}", literal, content);
    }
}

#[test]
fn test_failed_write_leaves_no_temp_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("merged.json");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("occupied"), "x").unwrap();

    let result = write_scans(&path, &[], 2);

    assert!(matches!(result, Err(Error::Write { .. })));
    assert!(!temp_dir.path().join("merged.json.tmp").exists());
}

#[test]
fn test_read_poses_empty_list() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("new.json");
    fs::write(&path, r#"{"scans": [], "source": "colmap"}"#).unwrap();
    let poses = read_poses(&path).unwrap();
    assert!(poses.is_empty());
}

#[test]
fn test_file_round_trip_preserves_key_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let scans_path = temp_dir.path().join("api.json");
    let poses_path = temp_dir.path().join("new.json");
    let output_path = temp_dir.path().join("merged.json");
    fs::write(
        &scans_path,
        r#"[{"name": "p1", "pos": [0, 0, 0], "image": "p1.jpg", "rot_quat": [0, 0, 0, 1]}]"#,
    )
    .unwrap();
    fs::write(
        &poses_path,
        r#"{"scans": [{"translation": [1, 2, 3], "rotation": [0, 1, 0, 0]}]}"#,
    )
    .unwrap();

    let merged = merge(
        read_scans(&scans_path).unwrap(),
        &read_poses(&poses_path).unwrap(),
    )
    .unwrap();
    write_scans(&output_path, &merged, 2).unwrap();

    let content = fs::read_to_string(&output_path).unwrap();
    let expected = r#"[
  {
    "name": "p1",
    "pos": [
      1,
      2,
      3
    ],
    "image": "p1.jpg",
    "rot_quat": [
      0,
      1,
      0,
      0
    ]
  }
]"#;
    assert_eq!(content, expected);
    assert!(!temp_dir.path().join("merged.json.tmp").exists());
}

#[test]
fn test_write_scans_into_missing_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("missing").join("merged.json");
    let result = write_scans(&path, &[], 2);
    assert!(matches!(result, Err(Error::Write { .. })));
}
