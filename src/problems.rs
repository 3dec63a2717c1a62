//! Problem detection: a forgiving re-walk of the directory tree.
//!
//! Unlike the tree builder, this traversal keeps going after failures so a
//! single bad subtree does not hide its siblings' problems. It re-reads
//! the filesystem itself rather than consuming a built tree, because its
//! whole point is to visit entries the strict builder would refuse.
//!
//! Traversal is depth-unbounded and cycle-safe: every resolved absolute
//! path is visited at most once per run, so symlink loops terminate.

use crate::error::MetadataError;
use crate::ignore;
use crate::metadata::{self, Metadata};
use crate::owner::{FsOwner, OwnerLookup};
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::warn;

/// What is wrong with an entry.
#[derive(Debug)]
pub enum ProblemKind {
    /// A required file is missing or the metadata is malformed.
    Metadata(MetadataError),
    /// Metadata present but no `responsible` set here or up the tree;
    /// the filesystem owner was substituted.
    NoExplicitResponsible,
    /// README present but blank or whitespace-only.
    EmptyReadme,
    /// The directory itself could not be listed.
    Io(std::io::Error),
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemKind::Metadata(e) => write!(f, "{}", e),
            ProblemKind::NoExplicitResponsible => {
                write!(f, "No explicit responsibility for dataset")
            }
            ProblemKind::EmptyReadme => write!(f, "Readme is empty"),
            ProblemKind::Io(e) => write!(f, "Could not list directory: {}", e),
        }
    }
}

/// One reported problem: who is accountable, where, and what.
#[derive(Debug)]
pub struct Problem {
    /// Responsible parties for the entry: explicit, inherited from the
    /// nearest ancestor, or the filesystem-owner fallback. Empty only
    /// when metadata is broken and nothing was inherited.
    pub responsible: Vec<String>,
    /// Absolute (resolved) path of the problem entry.
    pub path: PathBuf,
    pub kind: ProblemKind,
}

/// Walk the tree under `root` and lazily report every problem found.
///
/// With `skip_problem_children` set, entries whose metadata or README is
/// unreadable are not descended into, preventing cascades of spurious
/// reports below a single bad ancestor. The flag applies at every level
/// of the traversal.
pub fn find_problems(root: &Path, skip_problem_children: bool) -> ProblemIter<FsOwner> {
    find_problems_with_owner(root, skip_problem_children, FsOwner)
}

/// Like [`find_problems`] with a custom [`OwnerLookup`], for tests and
/// platforms without a native owner lookup.
pub fn find_problems_with_owner<O: OwnerLookup>(
    root: &Path,
    skip_problem_children: bool,
    owner: O,
) -> ProblemIter<O> {
    ProblemIter {
        to_visit: vec![(root.to_path_buf(), Vec::new())],
        visited: HashSet::new(),
        pending: VecDeque::new(),
        skip_problem_children,
        owner,
    }
}

/// Lazy iterator over [`Problem`]s.
///
/// An explicit work stack keeps the traversal off the native call stack,
/// so pathological directory depth cannot overflow it. One iterator owns
/// one visited set for its whole lifetime; nothing is shared. Each `next`
/// call inspects at most one directory and holds no file handles across
/// yields, so stopping early is always clean.
pub struct ProblemIter<O> {
    /// Directories still to inspect, with the responsible parties
    /// inherited from their parent. Children are pushed reversed so
    /// traversal is pre-order in sorted name order.
    to_visit: Vec<(PathBuf, Vec<String>)>,
    visited: HashSet<PathBuf>,
    pending: VecDeque<Problem>,
    skip_problem_children: bool,
    owner: O,
}

impl<O: OwnerLookup> Iterator for ProblemIter<O> {
    type Item = Problem;

    fn next(&mut self) -> Option<Problem> {
        loop {
            if let Some(problem) = self.pending.pop_front() {
                return Some(problem);
            }
            let (dir, inherited) = self.to_visit.pop()?;
            self.inspect(dir, inherited);
        }
    }
}

impl<O: OwnerLookup> ProblemIter<O> {
    /// Inspect one directory: queue its problems and push its children.
    fn inspect(&mut self, dir: PathBuf, inherited: Vec<String>) {
        let dir = dir.canonicalize().unwrap_or(dir);
        if !self.visited.insert(dir.clone()) {
            return;
        }

        let mut broken = false;

        let meta = match metadata::read_metadata(&dir) {
            Ok(meta) => meta,
            Err(e) => {
                self.report(inherited.clone(), &dir, ProblemKind::Metadata(e));
                broken = true;
                Metadata::default()
            }
        };
        let Metadata {
            responsible: explicit,
            ignore: ignore_filter,
            ..
        } = meta;

        let mut responsible = if explicit.is_empty() { inherited } else { explicit };
        if responsible.is_empty() {
            warn!(path = %dir.display(), "nobody responsible, falling back to directory owner");
            responsible = match self.owner.owner_of(&dir) {
                Ok(owner) => vec![owner],
                Err(_) => Vec::new(),
            };
            self.report(
                responsible.clone(),
                &dir,
                ProblemKind::NoExplicitResponsible,
            );
        }

        match metadata::read_description(&dir) {
            Ok(readme) if readme.trim().is_empty() => {
                self.report(responsible.clone(), &dir, ProblemKind::EmptyReadme);
            }
            Ok(_) => {}
            Err(e) => {
                self.report(responsible.clone(), &dir, ProblemKind::Metadata(e));
                broken = true;
            }
        }

        if broken && self.skip_problem_children {
            return;
        }

        match ignore::child_names(&dir, &ignore_filter) {
            Ok(children) => {
                for child in children.into_iter().rev() {
                    self.to_visit.push((dir.join(child), responsible.clone()));
                }
            }
            Err(e) => {
                self.report(responsible, &dir, ProblemKind::Io(e));
            }
        }
    }

    fn report(&mut self, responsible: Vec<String>, path: &Path, kind: ProblemKind) {
        self.pending.push_back(Problem {
            responsible,
            path: path.to_path_buf(),
            kind,
        });
    }
}
