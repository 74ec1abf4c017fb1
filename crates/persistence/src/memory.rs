// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::store::{Store, StoreKey};
use std::collections::BTreeMap;

/// In-memory store for tests and ephemeral runs.
///
/// Behaves exactly like the durable backends at the contract level: absent
/// keys read as `None`, writes replace, removals of absent keys succeed.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<&'static str, String>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl Store for MemoryStore {
    fn read(&self, key: StoreKey) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.get(key.as_str()).cloned())
    }

    fn write(&mut self, key: StoreKey, value: &str) -> Result<(), PersistenceError> {
        self.entries.insert(key.as_str(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: StoreKey) -> Result<(), PersistenceError> {
        self.entries.remove(key.as_str());
        Ok(())
    }
}
