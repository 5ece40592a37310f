//! Catalog session
//!
//! A [`Session`] is the single writer over all catalog state: items,
//! categories, favorites, folders, the admin flag, and the transient view
//! state with its selection cursor. It is what a front end talks to.
//!
//! # Lifecycle
//!
//! ```text
//! Session::open(store)
//!     ↓ Snapshot::load (fail-soft)
//! ┌─→ presentation reads visible_items() / current_item()
//! │       ↓
//! │   callback (create/update/delete, toggle, navigate, ...)
//! │       ↓
//! │   mutation runs to completion
//! │       ↓
//! │   changed keys written to the store
//! └───────┘
//! ```
//!
//! The visible list is recomputed on every read and the open item is
//! resolved against it lazily, so nothing has to be invalidated explicitly
//! when filters or data change.
//!
//! Store write failures are logged and do not fail the mutation that caused
//! them; call [`Session::flush`] when durability has to be confirmed.

pub mod gate;

pub use gate::{AlwaysConfirm, ConfirmGate, NeverConfirm};

use crate::catalog::{CatalogError, CatalogStore, Item, ItemDraft};
use crate::db::snapshot::{self, Snapshot};
use crate::db::{DbError, KeyValueStore, StoreKey};
use crate::index::{FavoriteSet, Folder, FolderIndex};
use crate::view::{CategoryFilter, Direction, SelectionCursor, ViewMode, ViewState, visible_items};
use tracing::{debug, error, info};

/// Session result type
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Options applied when a session is opened
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Thumbnail for items whose first angle has no URL
    pub placeholder_thumbnail: Option<String>,
}

/// Single-writer catalog session over a key-value store
pub struct Session<S: KeyValueStore> {
    store: S,
    catalog: CatalogStore,
    folders: FolderIndex,
    favorites: FavoriteSet,
    admin: bool,
    view: ViewState,
    cursor: SelectionCursor,
}

impl<S: KeyValueStore> Session<S> {
    /// Open a session, loading persisted state from `store`
    #[must_use]
    pub fn open(store: S) -> Self {
        Self::with_options(store, &SessionOptions::default())
    }

    /// Open a session with explicit options
    #[must_use]
    pub fn with_options(store: S, options: &SessionOptions) -> Self {
        let snapshot = Snapshot::load(&store);
        Self::from_snapshot(store, snapshot, options)
    }

    /// Build a session from already-loaded state without reading `store`
    #[must_use]
    pub fn from_snapshot(store: S, snapshot: Snapshot, options: &SessionOptions) -> Self {
        let mut catalog = CatalogStore::new(snapshot.items, snapshot.categories);
        catalog.reserve_ids(snapshot.favorites.ids().iter().map(String::as_str));
        catalog.reserve_ids(
            snapshot
                .folders
                .iter()
                .flat_map(|folder| folder.item_ids.iter().map(String::as_str)),
        );
        if let Some(placeholder) = &options.placeholder_thumbnail {
            catalog = catalog.with_placeholder(placeholder.clone());
        }
        Self {
            store,
            catalog,
            folders: FolderIndex::new(snapshot.folders),
            favorites: snapshot.favorites,
            admin: snapshot.admin_mode,
            view: ViewState::default(),
            cursor: SelectionCursor::new(),
        }
    }

    // ---- presentation reads ------------------------------------------------

    /// Items that pass the current view filters, in catalog order
    #[must_use]
    pub fn visible_items(&self) -> Vec<&Item> {
        visible_items(self.catalog.items(), &self.favorites, &self.folders, &self.view)
    }

    /// The open item, if it is still visible
    #[must_use]
    pub fn current_item(&self) -> Option<&Item> {
        self.cursor.current_item(&self.visible_items())
    }

    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.admin
    }

    /// Look up any item by id, ignoring view filters
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.catalog.item(id)
    }

    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        self.catalog.categories()
    }

    #[must_use]
    pub fn folders(&self) -> &[Folder] {
        self.folders.folders()
    }

    #[must_use]
    pub fn folder(&self, id: &str) -> Option<&Folder> {
        self.folders.get(id)
    }

    #[must_use]
    pub const fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub const fn cursor(&self) -> &SelectionCursor {
        &self.cursor
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    // ---- view actions ------------------------------------------------------

    /// Replace all view filters at once
    pub fn set_view(&mut self, view: ViewState) {
        self.view = view;
    }

    /// Back to all items, all categories and an empty search
    pub fn reset_display(&mut self) {
        self.view.reset();
    }

    pub fn show_bookmarks(&mut self) {
        self.view.mode = ViewMode::Bookmarks;
    }

    pub fn select_folder(&mut self, folder_id: impl Into<String>) {
        self.view.mode = ViewMode::Folder(folder_id.into());
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.view.category = category;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.view.search = query.into();
    }

    /// Search for everything featuring `character`
    ///
    /// Clears the category and scope so the search covers the whole catalog,
    /// and closes the detail view.
    pub fn search_character(&mut self, character: &str) {
        self.view = ViewState {
            search: character.to_string(),
            ..ViewState::default()
        };
        self.cursor.close();
    }

    // ---- selection ---------------------------------------------------------

    pub fn open_item(&mut self, id: impl Into<String>) {
        self.cursor.open(id);
    }

    pub fn close(&mut self) {
        self.cursor.close();
    }

    /// Step the open item through the visible list, wrapping at the ends
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let visible = visible_items(self.catalog.items(), &self.favorites, &self.folders, &self.view);
        self.cursor.navigate(direction, &visible)
    }

    // ---- admin -------------------------------------------------------------

    pub fn set_admin(&mut self, admin: bool) {
        self.admin = admin;
        info!(admin, "admin mode changed");
        self.persist(StoreKey::AdminMode);
    }

    pub fn toggle_admin(&mut self) -> bool {
        self.set_admin(!self.admin);
        self.admin
    }

    // ---- items -------------------------------------------------------------

    /// Create an item and return its id
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::AdminRequired` outside admin mode, or the
    /// validation errors of [`CatalogStore::create_item`].
    pub fn create_item(&mut self, draft: ItemDraft) -> Result<String> {
        self.require_admin()?;
        let categories = self.catalog.categories().len();
        let id = self.catalog.create_item(draft)?.id.clone();
        self.persist(StoreKey::Items);
        if self.catalog.categories().len() != categories {
            self.persist(StoreKey::Categories);
        }
        Ok(id)
    }

    /// Edit an unlocked item
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::AdminRequired` outside admin mode,
    /// `CatalogError::Locked` if the item is locked, or the errors of
    /// [`CatalogStore::update_item`].
    pub fn update_item(&mut self, id: &str, draft: ItemDraft) -> Result<()> {
        self.require_admin()?;
        let item = self
            .catalog
            .item(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        if item.is_locked {
            return Err(CatalogError::Locked(id.to_string()));
        }
        self.catalog.update_item(id, draft)?;
        self.persist(StoreKey::Items);
        Ok(())
    }

    /// Lock or unlock an item against edits
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::AdminRequired` outside admin mode or
    /// `CatalogError::NotFound` for an unknown id.
    pub fn set_locked(&mut self, id: &str, locked: bool) -> Result<()> {
        self.require_admin()?;
        self.catalog.set_locked(id, locked)?;
        self.persist(StoreKey::Items);
        Ok(())
    }

    /// Delete an item once `gate` confirms
    ///
    /// Locked items can still be deleted. Closes the detail view if it was
    /// showing the item. Folder and favorite references are left in place.
    /// Returns `Ok(false)` if the gate declined.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::AdminRequired` outside admin mode or
    /// `CatalogError::NotFound` for an unknown id.
    pub fn delete_item(&mut self, id: &str, gate: &impl ConfirmGate) -> Result<bool> {
        self.require_admin()?;
        let item = self
            .catalog
            .item(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        if !gate.confirm(&format!("Delete '{}'?", item.name)) {
            return Ok(false);
        }

        self.catalog.delete_item(id);
        if self.cursor.is_open(id) {
            self.cursor.close();
        }
        self.persist(StoreKey::Items);
        Ok(true)
    }

    // ---- categories --------------------------------------------------------

    /// Add a category; `Ok(false)` if the name is blank or taken
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::AdminRequired` outside admin mode.
    pub fn create_category(&mut self, name: &str) -> Result<bool> {
        self.require_admin()?;
        let created = self.catalog.create_category(name);
        if created {
            self.persist(StoreKey::Categories);
        }
        Ok(created)
    }

    /// Rename a category, retagging items and the active filter
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::AdminRequired` outside admin mode.
    pub fn rename_category(&mut self, old: &str, new: &str) -> Result<bool> {
        self.require_admin()?;
        let Some(retagged) = self.catalog.rename_category(old, new) else {
            return Ok(false);
        };
        if self.view.category.is(old) {
            self.view.category = CategoryFilter::named(new.trim());
        }
        self.persist(StoreKey::Categories);
        if retagged > 0 {
            self.persist(StoreKey::Items);
        }
        Ok(true)
    }

    /// Delete a category once `gate` confirms
    ///
    /// Items keep the old category string. An active filter on the deleted
    /// category falls back to `All`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::AdminRequired` outside admin mode.
    pub fn delete_category(&mut self, name: &str, gate: &impl ConfirmGate) -> Result<bool> {
        self.require_admin()?;
        if !self.catalog.has_category(name) || !gate.confirm(&format!("Delete category '{name}'?")) {
            return Ok(false);
        }
        self.catalog.delete_category(name);
        if self.view.category.is(name) {
            self.view.category = CategoryFilter::All;
        }
        self.persist(StoreKey::Categories);
        Ok(true)
    }

    // ---- folders and favorites ---------------------------------------------

    /// Create a folder, returning its id (`None` for a blank name)
    pub fn create_folder(&mut self, name: &str) -> Option<String> {
        let id = self.folders.create(name)?;
        self.persist(StoreKey::Folders);
        Some(id)
    }

    pub fn rename_folder(&mut self, id: &str, name: &str) -> bool {
        let renamed = self.folders.rename(id, name);
        if renamed {
            self.persist(StoreKey::Folders);
        }
        renamed
    }

    /// Delete a folder once `gate` confirms
    ///
    /// If the folder was being viewed, the view falls back to all items.
    /// Unknown ids are a no-op and never prompt.
    pub fn delete_folder(&mut self, id: &str, gate: &impl ConfirmGate) -> bool {
        let Some(folder) = self.folders.get(id) else {
            return false;
        };
        if !gate.confirm(&format!("Delete folder '{}'?", folder.name)) {
            return false;
        }
        self.folders.delete(id);
        if self.view.mode.folder_id() == Some(id) {
            self.view.mode = ViewMode::All;
        }
        self.persist(StoreKey::Folders);
        true
    }

    /// Add an item to a folder; adding twice has no further effect
    pub fn add_to_folder(&mut self, item_id: &str, folder_id: &str) -> bool {
        let added = self.folders.add_item(item_id, folder_id);
        if added {
            self.persist(StoreKey::Folders);
        }
        added
    }

    pub fn remove_from_folder(&mut self, item_id: &str, folder_id: &str) -> bool {
        let removed = self.folders.remove_item(item_id, folder_id);
        if removed {
            self.persist(StoreKey::Folders);
        }
        removed
    }

    /// Flip the favorite flag, returning the new state
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let now = self.favorites.toggle(id);
        debug!(id, favorite = now, "toggled favorite");
        self.persist(StoreKey::Favorites);
        now
    }

    // ---- persistence -------------------------------------------------------

    /// Current state as a snapshot
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            items: self.catalog.items().to_vec(),
            categories: self.catalog.categories().to_vec(),
            favorites: self.favorites.clone(),
            folders: self.folders.folders().to_vec(),
            admin_mode: self.admin,
        }
    }

    /// Flush the backing store
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the store cannot be flushed.
    pub fn flush(&self) -> std::result::Result<(), DbError> {
        self.store.flush()
    }

    fn require_admin(&self) -> Result<()> {
        if self.admin {
            Ok(())
        } else {
            Err(CatalogError::AdminRequired)
        }
    }

    fn persist(&self, key: StoreKey) {
        let result = match key {
            StoreKey::Items => snapshot::write(&self.store, key, self.catalog.items()),
            StoreKey::Categories => snapshot::write(&self.store, key, self.catalog.categories()),
            StoreKey::Favorites => snapshot::write(&self.store, key, &self.favorites),
            StoreKey::Folders => snapshot::write(&self.store, key, self.folders.folders()),
            StoreKey::AdminMode => snapshot::write(&self.store, key, &self.admin),
        };
        if let Err(e) = result {
            error!(key = key.as_str(), error = %e, "failed to save state");
        }
    }
}

#[cfg(test)]
mod tests;
