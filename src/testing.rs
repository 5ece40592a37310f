//! Test fixtures: a throwaway sled database and ready-made catalog items

use crate::catalog::{AngleImage, Item};
use crate::db::Database;
use std::fs;
use std::path::{Path, PathBuf};

/// Sled database in a relative directory that is deleted on drop
pub struct TestDb {
    path: PathBuf,
    db: Database,
}

impl TestDb {
    /// Opens (and empties) the database at `path`
    ///
    /// # Panics
    /// When sled cannot open or clear it.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let db = Database::open(&path).expect("open test catalog");
        db.clear().expect("clear test catalog");

        Self { path, db }
    }

    #[must_use]
    pub const fn db(&self) -> &Database {
        &self.db
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let _ = self.db.clear();
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// A stored item as it would appear after loading
///
/// The item has a single front angle pointing at `https://img/<id>.png`.
#[must_use]
pub fn stored_item(id: &str, name: &str, category: &str) -> Item {
    let url = format!("https://img/{id}.png");
    Item {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        angles: vec![AngleImage::new("정면", url.clone())],
        thumbnail: url,
        ..Item::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{KeyValueStore, StoreKey};

    #[test]
    fn test_starts_empty() {
        let fixture = TestDb::new("figdex_fixture_empty");
        assert_eq!(fixture.db().count(), 0);
        assert!(fixture.path().is_dir());
    }

    #[test]
    fn test_removed_on_drop() {
        let path = PathBuf::from("figdex_fixture_drop");
        {
            let fixture = TestDb::new(&path);
            fixture.db().set(StoreKey::AdminMode, "true").unwrap();
            assert!(path.exists());
        }

        assert!(!path.exists());
    }

    #[test]
    fn test_stored_item() {
        let item = stored_item("7", "Rei", "여성 캐릭터");
        assert_eq!(item.thumbnail, "https://img/7.png");
        assert!(item.angles[0].has_url());
        assert!(!item.is_locked);
    }
}
