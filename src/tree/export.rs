//! Export: nested JSON form of the entry tree and flattened per-entry records.

use crate::tree::entry::Entry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON-shaped view of an [`Entry`] tree.
///
/// Field order is the serialized order; extra metadata keys are flattened
/// in between so the output is one flat object per entry plus `children`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntryJso {
    pub name: String,
    pub description: Option<String>,
    pub responsible: Vec<String>,
    #[serde(flatten)]
    pub metadata: BTreeMap<String, serde_json::Value>,
    pub children: BTreeMap<String, EntryJso>,
}

/// Convert an entry tree into its nested serializable form.
pub fn to_jso(entry: &Entry) -> EntryJso {
    EntryJso {
        name: entry.name.clone(),
        description: entry.description.clone(),
        responsible: entry.responsible.clone(),
        metadata: entry.metadata.clone(),
        children: entry
            .children
            .iter()
            .map(|(name, child)| (name.clone(), to_jso(child)))
            .collect(),
    }
}

/// One flattened record: `name` is the `/`-joined path from the root down
/// to this entry, `children` the plain list of child names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlatEntry {
    pub name: String,
    pub description: Option<String>,
    pub responsible: Vec<String>,
    #[serde(flatten)]
    pub metadata: BTreeMap<String, serde_json::Value>,
    pub children: Vec<String>,
}

/// Lazily flatten a nested tree into one record per entry.
///
/// Traversal is pre-order in declaration order, driven by an explicit
/// stack (children are pushed reversed so the first child is popped
/// first). Every entry appears exactly once.
pub fn flatten(root: &EntryJso) -> Flatten<'_> {
    Flatten {
        stack: vec![(None, root)],
    }
}

/// Iterator returned by [`flatten`].
pub struct Flatten<'a> {
    stack: Vec<(Option<String>, &'a EntryJso)>,
}

impl<'a> Iterator for Flatten<'a> {
    type Item = FlatEntry;

    fn next(&mut self) -> Option<FlatEntry> {
        let (parent, entry) = self.stack.pop()?;
        let name = match parent {
            Some(parent) => format!("{}/{}", parent, entry.name),
            None => entry.name.clone(),
        };
        for child in entry.children.values().rev() {
            self.stack.push((Some(name.clone()), child));
        }
        Some(FlatEntry {
            name,
            description: entry.description.clone(),
            responsible: entry.responsible.clone(),
            metadata: entry.metadata.clone(),
            children: entry.children.keys().cloned().collect(),
        })
    }
}
