//! Flattening of nested documents into dot-keyed entry stores.
//!
//! A mapping at prefix `P` with entry `(key, value)` emits under `P.key`
//! (just `key` at the root):
//!
//! - nested mappings recurse with the extended prefix;
//! - sequences are stored whole as a list of strings, each element rendered
//!   with its display form (containers in flow style);
//! - scalars are stored as parsed.
//!
//! Entries are written in document order into one map, so when two paths
//! produce the same flat key the later one wins. A null scalar removes
//! whatever an earlier path stored under its key.

use std::collections::HashMap;
use tracing::debug;

use crate::config::FlattenOptions;
use crate::error::{BundleError, Result};
use crate::parse::NestedNode;
use crate::store::{EntryStore, FlatValue};

/// Flatten a single document with default options
pub fn flatten(root: &NestedNode) -> Result<EntryStore> {
    flatten_with(root, FlattenOptions::default())
}

pub fn flatten_with(root: &NestedNode, options: FlattenOptions) -> Result<EntryStore> {
    flatten_documents_with(std::slice::from_ref(root), options)
}

/// Flatten several documents into one store, later documents overwriting earlier keys
pub fn flatten_documents(docs: &[NestedNode]) -> Result<EntryStore> {
    flatten_documents_with(docs, FlattenOptions::default())
}

pub fn flatten_documents_with(docs: &[NestedNode], options: FlattenOptions) -> Result<EntryStore> {
    let mut flattener = Flattener {
        entries: HashMap::new(),
        options,
    };

    for doc in docs {
        match doc {
            NestedNode::Mapping(entries) => flattener.walk_mapping("", entries),
            other => {
                return Err(BundleError::format(format!(
                    "the root of a YAML document must be a mapping, found a {}",
                    other.kind()
                )))
            }
        }
    }

    debug!(
        documents = docs.len(),
        entries = flattener.entries.len(),
        "flattened documents"
    );
    Ok(EntryStore::from_entries(flattener.entries))
}

struct Flattener {
    entries: HashMap<String, FlatValue>,
    options: FlattenOptions,
}

impl Flattener {
    fn walk_mapping(&mut self, prefix: &str, entries: &[(String, NestedNode)]) {
        for (key, value) in entries {
            let path = join_key(prefix, key);
            self.walk_value(path, value);
        }
    }

    fn walk_value(&mut self, path: String, value: &NestedNode) {
        match value {
            NestedNode::Mapping(entries) => self.walk_mapping(&path, entries),
            NestedNode::Sequence(items) => self.store_sequence(path, items),
            NestedNode::Scalar(scalar) if scalar.is_null() => {
                self.entries.remove(&path);
            }
            NestedNode::Scalar(scalar) => {
                self.entries.insert(path, FlatValue::Scalar(scalar.clone()));
            }
        }
    }

    fn store_sequence(&mut self, path: String, items: &[NestedNode]) {
        let strings = items.iter().map(|item| item.to_string()).collect();

        if self.options.index_keys {
            self.entries.insert(path.clone(), FlatValue::Sequence(strings));
            for (index, item) in items.iter().enumerate() {
                self.walk_value(format!("{}[{}]", path, index), item);
            }
        } else {
            self.entries.insert(path, FlatValue::Sequence(strings));
        }
    }
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}
