//! Per-entry metadata: readers for `METADATA.yaml` and `README.md`.
//!
//! Both files together make a directory a valid entry. Reads are the only
//! side-effect-free building block shared by the tree builder and the
//! problem detector; the two differ only in how they react to failures.

use crate::error::MetadataError;
use crate::ignore::IgnoreFilter;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Name of the per-entry metadata file.
pub const METADATA_NAME: &str = "METADATA.yaml";

/// Name of the per-entry description file.
pub const README_NAME: &str = "README.md";

/// Parsed contents of an entry's metadata file.
///
/// The optional `description` key duplicates the README's role and is not
/// authoritative; exports carry the README content. Unreserved keys are
/// kept opaquely in `extra` so they survive a round trip through export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub description: Option<String>,

    /// Accountable parties, e.g. "Ada Lovelace <ada@example.org>".
    /// Must be a list when present; a scalar is malformed.
    #[serde(default)]
    pub responsible: Vec<String>,

    /// Glob patterns excluding child names from traversal. Accepts a
    /// single string or a list; a bare "*" marks the entry as a leaf.
    #[serde(default)]
    pub ignore: IgnoreFilter,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Whether `dir` holds both files required of a valid entry.
pub fn is_entry(dir: &Path) -> bool {
    dir.join(METADATA_NAME).is_file() && dir.join(README_NAME).is_file()
}

/// Read and parse `METADATA.yaml` from `dir`.
///
/// An absent file is [`MetadataError::MissingMetadata`]; a present but
/// unparsable one (including a non-list `responsible` or an invalid
/// `ignore` glob) is [`MetadataError::MalformedMetadata`].
pub fn read_metadata(dir: &Path) -> Result<Metadata, MetadataError> {
    let path = dir.join(METADATA_NAME);
    if !path.is_file() {
        return Err(MetadataError::MissingMetadata(dir.to_path_buf()));
    }
    let contents =
        fs::read_to_string(&path).map_err(|_| MetadataError::MissingMetadata(dir.to_path_buf()))?;
    serde_yaml::from_str(&contents).map_err(|e| MetadataError::MalformedMetadata {
        path,
        reason: e.to_string(),
    })
}

/// Read the free-text description from `README.md` in `dir`.
pub fn read_description(dir: &Path) -> Result<String, MetadataError> {
    let path = dir.join(README_NAME);
    fs::read_to_string(path).map_err(|_| MetadataError::MissingDescription(dir.to_path_buf()))
}
