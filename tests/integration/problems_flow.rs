//! End-to-end: problem detection over on-disk trees.

use super::test_utils::{write_dataset_fixture, write_entry};
use ffs::owner::OwnerLookup;
use ffs::problems::{find_problems_with_owner, ProblemKind};
use std::fs;
use std::io;
use std::path::Path;
use tempfile::TempDir;

struct StubOwner;

impl OwnerLookup for StubOwner {
    fn owner_of(&self, _path: &Path) -> io::Result<String> {
        Ok("stub-owner".to_string())
    }
}

#[test]
fn test_clean_fixture_reports_nothing() {
    let temp_dir = TempDir::new().unwrap();
    write_dataset_fixture(temp_dir.path());

    let problems: Vec<_> = find_problems_with_owner(temp_dir.path(), false, StubOwner).collect();
    assert!(problems.is_empty(), "unexpected problems: {:?}", problems);
}

#[test]
fn test_detector_sees_past_export_depth_limits() {
    // The detector is depth-unbounded by design: a problem three levels
    // down is found even though exports might stop earlier.
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_entry(root, "responsible: [Ada]\n", "# r\n\nT.\n");
    write_entry(&root.join("a"), "{}\n", "# a\n\nT.\n");
    write_entry(&root.join("a").join("b"), "{}\n", "# b\n\nT.\n");
    write_entry(&root.join("a").join("b").join("c"), "{}\n", "   \n");

    let problems: Vec<_> = find_problems_with_owner(root, false, StubOwner).collect();
    assert_eq!(problems.len(), 1);
    assert!(matches!(problems[0].kind, ProblemKind::EmptyReadme));
    assert!(problems[0].path.ends_with("a/b/c"));
}

#[test]
fn test_problem_paths_are_absolute_and_under_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_entry(root, "responsible: [Ada]\n", "# r\n\nT.\n");
    fs::create_dir(root.join("broken")).unwrap();

    let canon = root.canonicalize().unwrap();
    for problem in find_problems_with_owner(root, false, StubOwner) {
        assert!(problem.path.starts_with(&canon));
        // Relativizing for the TSV report must always succeed.
        assert!(problem.path.strip_prefix(&canon).is_ok());
    }
}

#[test]
fn test_builder_failure_tree_is_still_fully_scanned() {
    // The strict builder would abort on the malformed entry; the
    // detector reports it and the unrelated problem next to it.
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_entry(root, "responsible: [Ada]\n", "# r\n\nT.\n");
    write_entry(&root.join("bad"), "ignore: [ '[' ]\n", "# bad\n\nT.\n");
    write_entry(&root.join("empty"), "{}\n", "\n");

    let problems: Vec<_> = find_problems_with_owner(root, false, StubOwner).collect();
    let kinds: Vec<String> = problems.iter().map(|p| p.kind.to_string()).collect();
    assert!(kinds.iter().any(|k| k.starts_with("Malformed metadata")));
    assert!(kinds.iter().any(|k| k == "Readme is empty"));
}

#[test]
fn test_skip_problems_suppresses_descendant_noise() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_entry(root, "responsible: [Ada]\n", "# r\n\nT.\n");
    fs::create_dir_all(root.join("broken").join("one")).unwrap();
    fs::create_dir_all(root.join("broken").join("two")).unwrap();

    let noisy = find_problems_with_owner(root, false, StubOwner).count();
    let quiet = find_problems_with_owner(root, true, StubOwner).count();
    // Only the broken directory itself is reported when skipping.
    assert_eq!(quiet, 2);
    assert!(noisy > quiet);
}
