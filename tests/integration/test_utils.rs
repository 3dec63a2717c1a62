//! Shared fixtures for integration tests: small on-disk entry trees.

use ffs::metadata::{METADATA_NAME, README_NAME};
use std::fs;
use std::path::Path;

/// Write a valid entry (metadata + readme) at `dir`, creating it.
pub fn write_entry(dir: &Path, metadata_yaml: &str, readme: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(METADATA_NAME), metadata_yaml).unwrap();
    fs::write(dir.join(README_NAME), readme).unwrap();
}

/// A three-level dataset layout used by several tests:
///
/// root
/// ├── experiments
/// │   ├── 2024_trial (leaf via ignore: "*", with a real subdirectory)
/// │   └── archive
/// └── reference
pub fn write_dataset_fixture(root: &Path) {
    write_entry(
        root,
        "responsible:\n  - Ada Lovelace <ada@example.org>\n",
        "# root\n\nAll project data.\n",
    );
    write_entry(
        &root.join("experiments"),
        "{}\n",
        "# experiments\n\nRaw experiment output.\n",
    );
    write_entry(
        &root.join("experiments").join("2024_trial"),
        "ignore: '*'\n",
        "# 2024_trial\n\nA finished trial.\n",
    );
    fs::create_dir_all(root.join("experiments").join("2024_trial").join("blobs")).unwrap();
    write_entry(
        &root.join("experiments").join("archive"),
        "{}\n",
        "# archive\n\nOld runs.\n",
    );
    write_entry(
        &root.join("reference"),
        "{}\n",
        "# reference\n\nShared reference data.\n",
    );
}
