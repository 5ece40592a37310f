//! Loading and saving persisted state
//!
//! Loading is fail-soft: a value that is missing, unreadable or malformed
//! leaves the built-in default in place and is logged, never returned as an
//! error. Stored items only replace the (empty) default catalog when they
//! decode to a non-empty list.

use super::{DbError, KeyValueStore, StoreKey};
use crate::catalog::{DEFAULT_CATEGORIES, Item};
use crate::index::{FavoriteSet, Folder, FolderIndex};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Everything that survives a restart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub items: Vec<Item>,
    pub categories: Vec<String>,
    pub favorites: FavoriteSet,
    pub folders: Vec<Folder>,
    pub admin_mode: bool,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            categories: DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect(),
            favorites: FavoriteSet::new(),
            folders: FolderIndex::default().folders().to_vec(),
            admin_mode: false,
        }
    }
}

impl Snapshot {
    /// Load state from `store`, keeping defaults for anything unusable
    #[must_use]
    pub fn load(store: &impl KeyValueStore) -> Self {
        let mut snapshot = Self::default();

        if let Some(favorites) = read::<Vec<String>>(store, StoreKey::Favorites) {
            snapshot.favorites = FavoriteSet::from(favorites);
        }
        if let Some(folders) = read::<Vec<Folder>>(store, StoreKey::Folders) {
            snapshot.folders = folders;
        }
        if let Some(items) = read::<Vec<Item>>(store, StoreKey::Items)
            && !items.is_empty()
        {
            snapshot.items = items;
        }
        if let Some(categories) = read::<Vec<String>>(store, StoreKey::Categories) {
            snapshot.categories = categories;
        }
        if let Some(admin_mode) = read::<bool>(store, StoreKey::AdminMode) {
            snapshot.admin_mode = admin_mode;
        }

        debug!(
            items = snapshot.items.len(),
            folders = snapshot.folders.len(),
            favorites = snapshot.favorites.len(),
            "loaded catalog state"
        );
        snapshot
    }

    /// Write every value to `store`
    ///
    /// # Errors
    ///
    /// Returns `DbError` on the first value that cannot be encoded or written.
    #[cfg(test)]
    pub fn save(&self, store: &impl KeyValueStore) -> Result<(), DbError> {
        write(store, StoreKey::Favorites, &self.favorites)?;
        write(store, StoreKey::Folders, &self.folders)?;
        write(store, StoreKey::Items, &self.items)?;
        write(store, StoreKey::Categories, &self.categories)?;
        write(store, StoreKey::AdminMode, &self.admin_mode)
    }
}

/// Encode `value` as JSON and store it under `key`
///
/// # Errors
///
/// Returns `DbError` if encoding or the backend write fails.
pub fn write<T: Serialize + ?Sized>(
    store: &impl KeyValueStore,
    key: StoreKey,
    value: &T,
) -> Result<(), DbError> {
    let encoded = serde_json::to_string(value)?;
    store.set(key, &encoded)
}

fn read<T: DeserializeOwned>(store: &impl KeyValueStore, key: StoreKey) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key = key.as_str(), error = %e, "failed to read stored value, keeping default");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key = key.as_str(), error = %e, "ignoring malformed stored value");
            None
        }
    }
}
