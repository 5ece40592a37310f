//! Bookmark folders
//!
//! A folder is a named, user-defined group of item ids. Membership behaves
//! like a set that remembers insertion order: adding an id that is already
//! present changes nothing.

use crate::catalog::IdGenerator;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Id of the folder every fresh catalog starts with
pub const DEFAULT_FOLDER_ID: &str = "default";

/// Display name of the default folder
pub const DEFAULT_FOLDER_NAME: &str = "내 컬렉션";

/// A named group of item ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "figureIds")]
    pub item_ids: Vec<String>,
}

impl Folder {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            item_ids: Vec::new(),
        }
    }

    #[must_use]
    pub fn contains(&self, item_id: &str) -> bool {
        self.item_ids.iter().any(|id| id == item_id)
    }
}

/// All folders, in creation order
#[derive(Debug, Clone)]
pub struct FolderIndex {
    folders: Vec<Folder>,
    ids: IdGenerator,
}

impl Default for FolderIndex {
    fn default() -> Self {
        Self::new(vec![Folder::new(DEFAULT_FOLDER_ID, DEFAULT_FOLDER_NAME)])
    }
}

impl FolderIndex {
    /// Wrap existing folders, collapsing any duplicate member ids
    #[must_use]
    pub fn new(mut folders: Vec<Folder>) -> Self {
        let mut ids = IdGenerator::new();
        for folder in &mut folders {
            ids.observe(&folder.id);
            let mut seen = std::collections::HashSet::new();
            folder.item_ids.retain(|id| seen.insert(id.clone()));
        }
        Self { folders, ids }
    }

    #[must_use]
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    /// Create a folder, returning its id
    ///
    /// Returns `None` when the trimmed name is empty.
    pub fn create(&mut self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = self.ids.next_id();
        debug!(id = %id, name, "created folder");
        self.folders.push(Folder::new(id.clone(), name));
        Some(id)
    }

    /// Rename a folder; no-op for unknown ids or blank names
    pub fn rename(&mut self, id: &str, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        match self.get_mut(id) {
            Some(folder) => {
                folder.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Delete a folder, returning it if it existed
    pub fn delete(&mut self, id: &str) -> Option<Folder> {
        let index = self.folders.iter().position(|f| f.id == id)?;
        debug!(id, "deleted folder");
        Some(self.folders.remove(index))
    }

    /// Add an item to a folder
    ///
    /// Returns `true` only if the membership changed. Adding an id that is
    /// already present, or targeting an unknown folder, is a no-op.
    pub fn add_item(&mut self, item_id: &str, folder_id: &str) -> bool {
        match self.get_mut(folder_id) {
            Some(folder) if !folder.contains(item_id) => {
                folder.item_ids.push(item_id.to_string());
                true
            }
            _ => false,
        }
    }

    /// Remove an item from a folder; returns `true` if it was a member
    pub fn remove_item(&mut self, item_id: &str, folder_id: &str) -> bool {
        let Some(folder) = self.get_mut(folder_id) else {
            return false;
        };
        let before = folder.item_ids.len();
        folder.item_ids.retain(|id| id != item_id);
        before != folder.item_ids.len()
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Folder> {
        self.folders.iter_mut().find(|f| f.id == id)
    }
}
