//! Visible-list computation
//!
//! [`visible_items`] maps a catalog snapshot and a [`ViewState`] to the
//! ordered list of items the presentation layer shows. It has no side
//! effects and returns the same list for the same inputs, so it is simply
//! recomputed after every change instead of being maintained incrementally.
//!
//! The stages run in a fixed order, each narrowing the previous result:
//!
//! ```text
//! all items (stored order, newest first)
//!     ↓ scope     All | Bookmarks (favorite ids) | Folder (member ids)
//!     ↓ category  exact, case-sensitive match unless `All`
//!     ↓ search    lower-cased substring of name OR character
//! visible list (stored order preserved)
//! ```
//!
//! # Iterator Adapters
//!
//! [`ItemFilterExt`] exposes each stage as a method on any iterator of item
//! references so stages can be chained or used on their own:
//!
//! ```
//! use figdex::view::filter::ItemFilterExt;
//! use figdex::view::CategoryFilter;
//! # let items: Vec<figdex::catalog::Item> = Vec::new();
//!
//! let result = items
//!     .iter()
//!     .in_category(&CategoryFilter::named("퍼리"))
//!     .matching_search("fox");
//! # assert!(result.is_empty());
//! ```

use super::state::{CategoryFilter, ViewMode, ViewState};
use crate::catalog::Item;
use crate::index::{FavoriteSet, FolderIndex};
use std::collections::HashSet;

/// Compute the visible list for a view
///
/// An unknown folder id yields an empty list rather than an error.
#[must_use]
pub fn visible_items<'a>(
    items: &'a [Item],
    favorites: &FavoriteSet,
    folders: &FolderIndex,
    view: &ViewState,
) -> Vec<&'a Item> {
    items
        .iter()
        .within_scope(&view.mode, favorites, folders)
        .in_category(&view.category)
        .matching_search(&view.search)
}

/// Extension trait adding the view stages to iterators of `&Item`
pub trait ItemFilterExt<'a>: IntoIterator<Item = &'a Item> + Sized {
    /// Restrict to the view mode's scope
    fn within_scope(
        self,
        mode: &ViewMode,
        favorites: &FavoriteSet,
        folders: &FolderIndex,
    ) -> Vec<&'a Item> {
        match mode {
            ViewMode::All => self.into_iter().collect(),
            ViewMode::Bookmarks => self
                .into_iter()
                .filter(|item| favorites.contains(&item.id))
                .collect(),
            ViewMode::Folder(folder_id) => {
                let Some(folder) = folders.get(folder_id) else {
                    return Vec::new();
                };
                let members: HashSet<&str> = folder.item_ids.iter().map(String::as_str).collect();
                self.into_iter()
                    .filter(|item| members.contains(item.id.as_str()))
                    .collect()
            }
        }
    }

    /// Keep items whose category equals the active one
    fn in_category(self, category: &CategoryFilter) -> Vec<&'a Item> {
        match category {
            CategoryFilter::All => self.into_iter().collect(),
            CategoryFilter::Named(name) => self
                .into_iter()
                .filter(|item| item.category == *name)
                .collect(),
        }
    }

    /// Keep items whose name or character contains the query
    ///
    /// A query that is blank after trimming matches everything. Otherwise
    /// the query is lower-cased as typed (surrounding whitespace included)
    /// and matched as a plain substring.
    fn matching_search(self, query: &str) -> Vec<&'a Item> {
        if query.trim().is_empty() {
            return self.into_iter().collect();
        }
        let needle = query.to_lowercase();
        self.into_iter()
            .filter(|item| item.matches_query(&needle))
            .collect()
    }
}

impl<'a, I> ItemFilterExt<'a> for I where I: IntoIterator<Item = &'a Item> {}
