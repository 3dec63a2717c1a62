//! End-to-end: build a tree from disk, export it nested and flattened.

use super::test_utils::write_dataset_fixture;
use ffs::tree::{flatten, to_jso, TreeBuilder};
use tempfile::TempDir;

#[test]
fn test_full_tree_flattens_to_one_record_per_directory() {
    let temp_dir = TempDir::new().unwrap();
    write_dataset_fixture(temp_dir.path());

    let entry = TreeBuilder::new(temp_dir.path().to_path_buf())
        .build()
        .unwrap();
    let jso = to_jso(&entry);

    let names: Vec<String> = flatten(&jso).map(|r| r.name).collect();
    let root_name = entry.name.clone();
    let expected: Vec<String> = [
        "",
        "/experiments",
        "/experiments/2024_trial",
        "/experiments/archive",
        "/reference",
    ]
    .iter()
    .map(|suffix| format!("{}{}", root_name, suffix))
    .collect();
    assert_eq!(names, expected);

    let mut unique = names.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn test_leaf_via_ignore_star_has_no_children() {
    let temp_dir = TempDir::new().unwrap();
    write_dataset_fixture(temp_dir.path());

    let entry = TreeBuilder::new(temp_dir.path().to_path_buf())
        .build()
        .unwrap();
    let trial = &entry.children["experiments"].children["2024_trial"];
    // "blobs" exists on disk but the leaf marker hides it.
    assert!(trial.children.is_empty());
}

#[test]
fn test_depth_bound_limits_export() {
    let temp_dir = TempDir::new().unwrap();
    write_dataset_fixture(temp_dir.path());

    let entry = TreeBuilder::new(temp_dir.path().to_path_buf())
        .with_max_depth(1)
        .build()
        .unwrap();
    let jso = to_jso(&entry);

    assert_eq!(flatten(&jso).count(), 3);
    assert!(jso.children["experiments"].children.is_empty());
}

#[test]
fn test_nested_export_serializes_responsible_and_children() {
    let temp_dir = TempDir::new().unwrap();
    write_dataset_fixture(temp_dir.path());

    let entry = TreeBuilder::new(temp_dir.path().to_path_buf())
        .build()
        .unwrap();
    let value = serde_json::to_value(to_jso(&entry)).unwrap();

    assert_eq!(
        value["responsible"],
        serde_json::json!(["Ada Lovelace <ada@example.org>"])
    );
    assert!(value["children"]["reference"]["description"]
        .as_str()
        .unwrap()
        .contains("Shared reference data"));
}

#[test]
fn test_flatten_serializes_children_as_names() {
    let temp_dir = TempDir::new().unwrap();
    write_dataset_fixture(temp_dir.path());

    let entry = TreeBuilder::new(temp_dir.path().to_path_buf())
        .build()
        .unwrap();
    let jso = to_jso(&entry);

    let root_record = flatten(&jso).next().unwrap();
    let line = serde_json::to_string(&root_record).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(
        parsed["children"],
        serde_json::json!(["experiments", "reference"])
    );
}
