//! ffs: Flexible File Structure tooling.
//!
//! Models a directory tree as a hierarchy of metadata-carrying entries,
//! each described by a `METADATA.yaml` and a `README.md`. Provides tree
//! construction with ignore patterns and depth bounds, structural problem
//! detection with ownership fallback, and nested or flattened JSON export.

pub mod cli;
pub mod error;
pub mod ignore;
pub mod logging;
pub mod metadata;
pub mod owner;
pub mod problems;
pub mod tree;
