//! Ignore patterns: shell-style globs excluding child names from traversal.
//!
//! Patterns come from the `ignore` key of an entry's metadata and are
//! matched against immediate child names only, never full paths. The same
//! filter drives both the tree builder and the problem detector so the two
//! always agree on which children exist.

use glob::Pattern;
use serde::de::{Deserialize, Deserializer, Error as _};
use std::fs;
use std::io;
use std::path::Path;

/// Compiled `ignore` patterns from an entry's metadata.
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    patterns: Vec<Pattern>,
}

impl IgnoreFilter {
    /// Compile a list of glob patterns.
    pub fn new(patterns: &[String]) -> Result<Self, glob::PatternError> {
        let patterns = patterns
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Whether a child name matches any ignore pattern.
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl<'de> Deserialize<'de> for IgnoreFilter {
    /// Accepts either a single pattern string or a list of patterns, so
    /// `ignore: "*"` stays valid shorthand for "this entry is a leaf".
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            One(String),
            Many(Vec<String>),
        }

        let raw = match OneOrMany::deserialize(deserializer)? {
            OneOrMany::One(pattern) => vec![pattern],
            OneOrMany::Many(patterns) => patterns,
        };
        IgnoreFilter::new(&raw)
            .map_err(|e| D::Error::custom(format!("invalid ignore pattern: {}", e)))
    }
}

/// Immediate subdirectory names of `dir`, minus ignore matches, sorted.
///
/// Symlinks to directories count as directories; cycle safety is the
/// caller's concern. Whether a child is a *valid* entry is not checked
/// here: the builder skips invalid children silently while the problem
/// detector descends into them to report what is wrong.
pub fn child_names(dir: &Path, filter: &IgnoreFilter) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if filter.matches(&name) {
            continue;
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}
