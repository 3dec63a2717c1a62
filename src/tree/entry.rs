//! Entry: one node of the modeled directory tree.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// One directory of the structure, with its metadata and children.
///
/// Fully populated at construction and never mutated afterwards. The
/// `responsible` field is only what this entry's metadata set explicitly;
/// inheritance from ancestors is a consumer concern (the problem detector
/// resolves it during its own traversal).
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Base name of the directory.
    pub name: String,
    /// Free text from the entry's README.
    pub description: Option<String>,
    /// Accountable parties, as set in this entry's metadata.
    pub responsible: Vec<String>,
    /// Unreserved metadata keys, preserved opaquely.
    pub metadata: BTreeMap<String, serde_json::Value>,
    /// Child entries keyed by name; keys are unique and ordered.
    pub children: BTreeMap<String, Entry>,
    /// Absolute path of the directory.
    pub path: PathBuf,
}
