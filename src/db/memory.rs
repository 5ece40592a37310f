//! In-memory store for tests and ephemeral sessions

use super::{DbError, KeyValueStore, StoreKey};
use std::cell::RefCell;
use std::collections::HashMap;

/// Key-value store that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<StoreKey, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, e.g. to simulate previously stored data
    #[must_use]
    pub fn with_value(self, key: StoreKey, value: impl Into<String>) -> Self {
        self.values.borrow_mut().insert(key, value.into());
        self
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StoreKey) -> Result<Option<String>, DbError> {
        Ok(self.values.borrow().get(&key).cloned())
    }

    fn set(&self, key: StoreKey, value: &str) -> Result<(), DbError> {
        self.values.borrow_mut().insert(key, value.to_string());
        Ok(())
    }
}
