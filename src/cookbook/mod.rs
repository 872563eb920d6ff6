// src/cookbook/mod.rs

//! In-memory entry store
//!
//! The cookbook maps unique entry names to entries. Names are unique
//! across both variants (an ingredient and a recipe cannot share a name)
//! and entries are write-once: there is no update or delete. All
//! insertion-time invariants are enforced here, so an entry that made it
//! into the store is structurally valid; only cross-entry references are
//! left to the resolver.
//!
//! The store is an owned object injected into the server state rather
//! than ambient process-wide state, so tests get isolated instances.

mod entry;

pub use entry::{Entry, RequiredItem};

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::{Error, Result};

/// Store of named cookbook entries.
#[derive(Debug, Default)]
pub struct Cookbook {
    entries: HashMap<String, Entry>,
}

impl Cookbook {
    /// Create a new empty cookbook
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert an entry, enforcing the insertion-time invariants.
    ///
    /// Fails with:
    /// - `InvalidInput` for an empty name or a zero required-item quantity
    /// - `DuplicateName` if the name is already taken by either variant
    /// - `InvalidCookTime` for a negative ingredient cook time
    /// - `DuplicateRequiredItem` if a recipe lists one item name twice
    ///
    /// On failure the store is unchanged.
    pub fn insert(&mut self, entry: Entry) -> Result<()> {
        let name = entry.name().to_string();
        if name.is_empty() {
            return Err(Error::InvalidInput(
                "Entry name must not be empty".to_string(),
            ));
        }
        if self.entries.contains_key(&name) {
            return Err(Error::DuplicateName(name));
        }

        match &entry {
            Entry::Ingredient { cook_time, .. } => {
                if *cook_time < 0 {
                    return Err(Error::InvalidCookTime {
                        name,
                        cook_time: *cook_time,
                    });
                }
            }
            Entry::Recipe { required_items, .. } => {
                let mut seen = HashSet::new();
                for item in required_items {
                    if !seen.insert(item.name.as_str()) {
                        return Err(Error::DuplicateRequiredItem {
                            recipe: name,
                            item: item.name.clone(),
                        });
                    }
                    if item.quantity == 0 {
                        return Err(Error::InvalidInput(format!(
                            "Required item '{}' must have quantity >= 1",
                            item.name
                        )));
                    }
                }
            }
        }

        debug!("Adding {} '{}' to the cookbook", entry.type_tag(), name);
        self.entries.insert(name, entry);
        Ok(())
    }

    /// Look up an entry by name. Pure read, no side effects.
    pub fn lookup(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries have been inserted yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
