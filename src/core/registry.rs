//! RG-006: Resource registry - the name → blob table the generated code exposes.
//!
//! Built explicitly from a merged resource map and never mutated afterwards.
//! Building it validates what the generated source relies on:
//! - every definition parses and declares the entry's identifier
//! - no two keys share an identifier

use super::hexlit;
use super::types::ResourceMap;
use indexmap::IndexMap;
use std::collections::HashMap;

/// One embedded blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub identifier: String,
    pub data: Vec<u8>,
}

impl Record {
    /// Size in bytes, i.e. `sizeof(identifier)` in the generated source.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Immutable lookup table keyed by the full `rsc:/<path>` string.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    records: IndexMap<String, Record>,
}

impl Registry {
    /// Decode and validate every entry of `map`.
    pub fn from_map(map: &ResourceMap) -> Result<Self, String> {
        let mut records = IndexMap::with_capacity(map.len());
        let mut owners: HashMap<&str, &str> = HashMap::with_capacity(map.len());

        for (key, entry) in map {
            let (declared, data) =
                hexlit::parse_definition(&entry.definition).map_err(|e| format!("{}: {}", key, e))?;
            if declared != entry.identifier {
                return Err(format!(
                    "{}: definition declares '{}' but the entry names '{}'",
                    key, declared, entry.identifier
                ));
            }
            if let Some(other) = owners.insert(entry.identifier.as_str(), key.as_str()) {
                return Err(format!(
                    "identifier '{}' is used by both {} and {}",
                    entry.identifier, other, key
                ));
            }
            records.insert(
                key.clone(),
                Record {
                    identifier: declared,
                    data,
                },
            );
        }
        Ok(Registry { records })
    }

    /// Exact-key lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Entries in map order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|(k, r)| (k.as_str(), r))
    }

    /// Total embedded bytes.
    pub fn total_size(&self) -> usize {
        self.records.values().map(Record::size).sum()
    }
}
