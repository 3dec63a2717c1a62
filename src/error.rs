//! Error types for the flexible file structure tooling.

use std::path::PathBuf;
use thiserror::Error;

/// Failures reading a single entry's metadata or description files.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Metadata file not found in {}", .0.display())]
    MissingMetadata(PathBuf),

    #[error("Description file not found or unreadable in {}", .0.display())]
    MissingDescription(PathBuf),

    #[error("Malformed metadata in {}: {}", .path.display(), .reason)]
    MalformedMetadata { path: PathBuf, reason: String },
}

/// Errors from tree construction and export.
#[derive(Debug, Error)]
pub enum FfsError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
