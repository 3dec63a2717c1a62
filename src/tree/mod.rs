//! The entry tree: construction from the filesystem and export forms.

pub mod builder;
pub mod entry;
pub mod export;

pub use builder::TreeBuilder;
pub use entry::Entry;
pub use export::{flatten, to_jso, EntryJso, FlatEntry};
