//! Tree builder: recursive construction of the entry hierarchy.

use crate::error::FfsError;
use crate::ignore;
use crate::metadata;
use crate::tree::entry::Entry;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Builds an [`Entry`] tree from a root directory.
///
/// Construction is strict: the root and every recursed-into child must be
/// a valid entry, and any metadata failure aborts the whole build. Child
/// directories that are not valid entries are skipped silently; reporting
/// them is the problem detector's job.
pub struct TreeBuilder {
    root: PathBuf,
    max_depth: i32,
}

impl TreeBuilder {
    /// Builder for `root` with unbounded recursion.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            max_depth: -1,
        }
    }

    /// Bound recursion depth: negative for unbounded, 0 for the root only.
    pub fn with_max_depth(mut self, max_depth: i32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Build the complete entry tree.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<Entry, FfsError> {
        if !self.root.is_dir() {
            return Err(FfsError::NotADirectory(self.root.clone()));
        }
        let root = self.root.canonicalize()?;
        build_entry(&root, self.max_depth)
    }
}

fn build_entry(dir: &Path, depth: i32) -> Result<Entry, FfsError> {
    let meta = metadata::read_metadata(dir)?;
    let description = metadata::read_description(dir)?;

    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| dir.to_string_lossy().to_string());

    let mut children = BTreeMap::new();
    if depth != 0 {
        let remaining = if depth > 0 { depth - 1 } else { depth };
        for child in ignore::child_names(dir, &meta.ignore)? {
            let child_path = dir.join(&child);
            if !metadata::is_entry(&child_path) {
                debug!(child = %child_path.display(), "skipping directory that is not a valid entry");
                continue;
            }
            children.insert(child, build_entry(&child_path, remaining)?);
        }
    }

    Ok(Entry {
        name,
        description: Some(description),
        responsible: meta.responsible,
        metadata: meta.extra,
        children,
        path: dir.to_path_buf(),
    })
}
