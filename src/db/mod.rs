//! Key-value persistence for figdex
//!
//! Persisted state is a handful of named values, each stored as a JSON
//! string under a fixed key:
//!
//! | Key          | Value                          |
//! |--------------|--------------------------------|
//! | `favorites`  | `["id", ...]`                  |
//! | `folders`    | `[{id, name, itemIds}, ...]`   |
//! | `items`      | `[Item, ...]`                  |
//! | `categories` | `["name", ...]`                |
//! | `adminMode`  | `true` / `false`               |
//!
//! [`KeyValueStore`] is the seam between the session and the storage
//! backend. [`Database`] stores the values in a sled tree; [`MemoryStore`]
//! keeps them in memory for tests and throwaway sessions.

use sled::{Db, Tree};
use std::path::Path;

pub mod error;
pub mod memory;
pub mod snapshot;

pub use error::DbError;
pub use memory::MemoryStore;
pub use snapshot::Snapshot;

/// Names of the persisted values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Favorites,
    Folders,
    Items,
    Categories,
    AdminMode,
}

impl StoreKey {
    /// Every key, in load order
    pub const ALL: [Self; 5] = [
        Self::Favorites,
        Self::Folders,
        Self::Items,
        Self::Categories,
        Self::AdminMode,
    ];

    /// Storage key string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Favorites => "favorites",
            Self::Folders => "folders",
            Self::Items => "items",
            Self::Categories => "categories",
            Self::AdminMode => "adminMode",
        }
    }
}

/// String-valued key-value storage
///
/// Implementations only move strings around; encoding is handled by
/// [`snapshot`].
pub trait KeyValueStore {
    /// Read the raw value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the backend cannot be read.
    fn get(&self, key: StoreKey) -> Result<Option<String>, DbError>;

    /// Replace the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the backend cannot be written.
    fn set(&self, key: StoreKey, value: &str) -> Result<(), DbError>;

    /// Make previous writes durable
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the backend fails to flush.
    fn flush(&self) -> Result<(), DbError> {
        Ok(())
    }
}

/// sled-backed store
///
/// All values live in a single `state` tree keyed by [`StoreKey::as_str`].
pub struct Database {
    db: Db,
    state: Tree,
}

impl Database {
    /// Opens or creates a database at the specified path
    ///
    /// # Examples
    /// ```no_run
    /// use figdex::db::Database;
    /// let db = Database::open("my_catalog").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the database or its tree cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DbError> {
        let db = sled::open(path)?;
        let state = db.open_tree("state")?;
        Ok(Self { db, state })
    }

    /// Number of stored keys
    #[cfg(test)]
    #[must_use]
    pub fn count(&self) -> usize {
        self.state.len()
    }

    /// Check if a value is stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the lookup fails.
    #[cfg(test)]
    pub fn contains(&self, key: StoreKey) -> Result<bool, DbError> {
        Ok(self.state.contains_key(key.as_str())?)
    }

    /// Clear all stored values
    ///
    /// # Warning
    /// This operation is irreversible!
    ///
    /// # Errors
    ///
    /// Returns `DbError` if clearing the tree fails.
    #[cfg(test)]
    pub fn clear(&self) -> Result<(), DbError> {
        self.state.clear()?;
        Ok(())
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: StoreKey) -> Result<Option<String>, DbError> {
        match self.state.get(key.as_str())? {
            Some(value) => String::from_utf8(value.to_vec())
                .map(Some)
                .map_err(|e| DbError::SerializeError(format!("{}: {e}", key.as_str()))),
            None => Ok(None),
        }
    }

    fn set(&self, key: StoreKey, value: &str) -> Result<(), DbError> {
        self.state.insert(key.as_str(), value.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), DbError> {
        self.db.flush()?;
        Ok(())
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        // Best-effort flush on drop. Errors are ignored since we can't
        // propagate them from Drop. Callers should explicitly flush()
        // if they need guaranteed durability.
        let _ = self.db.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestDb;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_create_database() {
        let test_db = TestDb::new("test_db_create");
        assert!(test_db.path().exists());
        assert_eq!(test_db.db().count(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let test_db = TestDb::new("test_db_set_get");
        let db = test_db.db();

        db.set(StoreKey::Categories, r#"["퍼리"]"#).unwrap();
        assert_eq!(db.get(StoreKey::Categories).unwrap().as_deref(), Some(r#"["퍼리"]"#));
        assert_eq!(db.get(StoreKey::Items).unwrap(), None);
        assert!(db.contains(StoreKey::Categories).unwrap());
        assert_eq!(db.count(), 1);
    }

    #[test]
    fn test_set_overwrites() {
        let test_db = TestDb::new("test_db_overwrite");
        let db = test_db.db();

        db.set(StoreKey::AdminMode, "true").unwrap();
        db.set(StoreKey::AdminMode, "false").unwrap();
        assert_eq!(db.get(StoreKey::AdminMode).unwrap().as_deref(), Some("false"));
        assert_eq!(db.count(), 1);
    }

    #[test]
    fn test_clear() {
        let test_db = TestDb::new("test_db_clear");
        let db = test_db.db();
        for key in StoreKey::ALL {
            db.set(key, "[]").unwrap();
        }
        assert_eq!(db.count(), 5);

        db.clear().unwrap();
        assert_eq!(db.count(), 0);
    }

    #[test]
    fn test_reopen_existing_database() {
        let test_db_path = PathBuf::from("test_db_reopen");

        {
            let db = Database::open(&test_db_path).unwrap();
            db.clear().unwrap();
            db.set(StoreKey::Favorites, r#"["1"]"#).unwrap();
            db.flush().unwrap();
        }

        {
            let db = Database::open(&test_db_path).unwrap();
            assert_eq!(db.get(StoreKey::Favorites).unwrap().as_deref(), Some(r#"["1"]"#));
            db.clear().unwrap();
        }

        let _ = fs::remove_dir_all(test_db_path);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let test_db = TestDb::new("test_db_bad_utf8");
        let db = test_db.db();
        db.state.insert(StoreKey::Items.as_str(), &[0xff_u8, 0xfe][..]).unwrap();

        assert!(matches!(db.get(StoreKey::Items), Err(DbError::SerializeError(_))));
    }

    #[test]
    fn test_key_names() {
        let names: Vec<&str> = StoreKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["favorites", "folders", "items", "categories", "adminMode"]);
    }
}
