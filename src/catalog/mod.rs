//! Catalog store
//!
//! Owns the authoritative list of items and the list of category names.
//! Every mutation validates its input first and only then writes, so a
//! failed operation never leaves a partial change behind.
//!
//! Items are kept newest first: [`CatalogStore::create_item`] prepends, and
//! callers must treat the stored order as the display order.
//!
//! Categories are plain names referenced by value from items. Creating or
//! editing an item only accepts a live category name. Renaming a category
//! retags the items that use it; deleting one leaves those items holding the
//! old name.

pub mod error;
pub mod ids;
pub mod types;

pub use error::CatalogError;
pub use ids::IdGenerator;
pub use types::{
    AngleImage, DEFAULT_SOURCE, Item, ItemDraft, PLACEHOLDER_THUMBNAIL, UNCATEGORIZED, normalize_name,
};

use tracing::debug;

/// Category names seeded on first run
pub const DEFAULT_CATEGORIES: [&str; 3] = ["여성 캐릭터", "남성 캐릭터", "퍼리"];

/// In-memory catalog of items and categories
#[derive(Debug, Clone)]
pub struct CatalogStore {
    items: Vec<Item>,
    categories: Vec<String>,
    ids: IdGenerator,
    placeholder_thumbnail: String,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(
            Vec::new(),
            DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect(),
        )
    }
}

impl CatalogStore {
    /// Create a store over existing items and categories
    ///
    /// Every item id is registered with the id generator so that freshly
    /// created items can never reuse one.
    #[must_use]
    pub fn new(items: Vec<Item>, categories: Vec<String>) -> Self {
        let mut ids = IdGenerator::new();
        for item in &items {
            ids.observe(&item.id);
        }
        Self {
            items,
            categories,
            ids,
            placeholder_thumbnail: types::PLACEHOLDER_THUMBNAIL.to_string(),
        }
    }

    /// Keep freshly issued ids clear of ids referenced outside the catalog,
    /// such as stale favorite or folder entries
    pub fn reserve_ids<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            self.ids.observe(id);
        }
    }

    /// Override the thumbnail used when an item has no first-angle URL
    #[must_use]
    pub fn with_placeholder(mut self, url: impl Into<String>) -> Self {
        self.placeholder_thumbnail = url.into();
        self
    }

    /// All items, newest first
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by id
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Create a new item from a draft and prepend it to the catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` if the name is blank, no angle has
    /// a URL or the category is unknown, and `CatalogError::DuplicateName` if
    /// another item already uses the name (compared trimmed and
    /// case-insensitively).
    ///
    /// A draft without a category gets the first category. With no categories
    /// at all, [`UNCATEGORIZED`] is added and used.
    pub fn create_item(&mut self, draft: ItemDraft) -> Result<&Item, CatalogError> {
        let name = draft.name.unwrap_or_default().trim().to_string();
        let angles = draft.angles.unwrap_or_default();
        validate(&name, &angles)?;
        self.ensure_unique(&name, None)?;
        let category = match draft.category {
            Some(requested) => self.live_category(&requested)?,
            None => self
                .categories
                .first()
                .cloned()
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
        };

        let thumbnail = draft
            .thumbnail
            .filter(|t| !t.trim().is_empty())
            .or_else(|| angles.first().filter(|a| a.has_url()).map(|a| a.url.clone()))
            .unwrap_or_else(|| self.placeholder_thumbnail.clone());

        let item = Item {
            id: self.ids.next_id(),
            name,
            character: draft.character.unwrap_or_default(),
            source: draft.source.unwrap_or_default(),
            source_url: draft.source_url.filter(|url| !url.is_empty()),
            category,
            description: draft.description.unwrap_or_default(),
            angles,
            thumbnail,
            is_user_added: true,
            is_locked: false,
        };

        if !self.has_category(&item.category) {
            debug!(category = %item.category, "seeded category");
            self.categories.push(item.category.clone());
        }
        debug!(id = %item.id, name = %item.name, "created item");
        self.items.insert(0, item);
        Ok(&self.items[0])
    }

    /// Merge a draft onto an existing item
    ///
    /// Fields the draft leaves unset keep their current values. The merged
    /// item is validated as a whole, and the duplicate-name check ignores the
    /// item being edited. A new category must be a live one; resending the
    /// item's current category is accepted even after that category was
    /// deleted.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no item has `id`, plus the same
    /// validation errors as [`CatalogError::Validation`] and
    /// [`CatalogError::DuplicateName`] for creation.
    pub fn update_item(&mut self, id: &str, mut draft: ItemDraft) -> Result<&Item, CatalogError> {
        let index = self
            .position(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        if let Some(requested) = draft.category.take() {
            let category = if requested.trim() == self.items[index].category {
                self.items[index].category.clone()
            } else {
                self.live_category(&requested)?
            };
            draft.category = Some(category);
        }

        let mut candidate = self.items[index].clone();
        draft.merge_into(&mut candidate);
        candidate.name = candidate.name.trim().to_string();
        validate(&candidate.name, &candidate.angles)?;
        self.ensure_unique(&candidate.name, Some(id))?;

        debug!(id, "updated item");
        self.items[index] = candidate;
        Ok(&self.items[index])
    }

    /// Remove an item, returning it if it existed
    ///
    /// Folder and favorite references to the item are left in place.
    pub fn delete_item(&mut self, id: &str) -> Option<Item> {
        let index = self.position(id)?;
        debug!(id, "deleted item");
        Some(self.items.remove(index))
    }

    /// Set or clear the edit lock on an item
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no item has `id`.
    pub fn set_locked(&mut self, id: &str, locked: bool) -> Result<(), CatalogError> {
        let index = self
            .position(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        self.items[index].is_locked = locked;
        Ok(())
    }

    /// Add a category name
    ///
    /// Returns `false` without changing anything when the trimmed name is
    /// empty or already present.
    pub fn create_category(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.has_category(name) {
            return false;
        }
        self.categories.push(name.to_string());
        true
    }

    /// Rename a category and retag every item that used the old name
    ///
    /// Returns the number of retagged items, or `None` if nothing changed
    /// (blank or unchanged new name, unknown old name, or a new name that
    /// is already taken).
    pub fn rename_category(&mut self, old: &str, new: &str) -> Option<usize> {
        let new = new.trim();
        if new.is_empty() || new == old || self.has_category(new) {
            return None;
        }
        let slot = self.categories.iter_mut().find(|c| *c == old)?;
        *slot = new.to_string();

        let mut retagged = 0;
        for item in self.items.iter_mut().filter(|item| item.category == old) {
            item.category = new.to_string();
            retagged += 1;
        }
        debug!(old, new, retagged, "renamed category");
        Some(retagged)
    }

    /// Remove a category name
    ///
    /// Items keep their category string. Returns `false` if the name was
    /// not present.
    pub fn delete_category(&mut self, name: &str) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c != name);
        before != self.categories.len()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn live_category(&self, requested: &str) -> Result<String, CatalogError> {
        let name = requested.trim();
        if self.has_category(name) {
            Ok(name.to_string())
        } else {
            Err(CatalogError::Validation(format!("unknown category '{name}'")))
        }
    }

    fn ensure_unique(&self, name: &str, exclude_id: Option<&str>) -> Result<(), CatalogError> {
        let normalized = normalize_name(name);
        let taken = self
            .items
            .iter()
            .filter(|item| Some(item.id.as_str()) != exclude_id)
            .any(|item| item.normalized_name() == normalized);

        if taken {
            Err(CatalogError::DuplicateName(name.to_string()))
        } else {
            Ok(())
        }
    }
}

fn validate(name: &str, angles: &[AngleImage]) -> Result<(), CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::Validation("item name is required".into()));
    }
    if !angles.iter().any(AngleImage::has_url) {
        return Err(CatalogError::Validation(
            "at least one image URL is required".into(),
        ));
    }
    Ok(())
}
