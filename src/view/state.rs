//! Transient view state
//!
//! The view state holds the coarse scope of the visible list, the active
//! category filter and the search text. It is never persisted.

use std::fmt;

/// Coarse scope of the visible list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Every item in the catalog
    #[default]
    All,
    /// Only favorited items
    Bookmarks,
    /// Only members of the folder with this id
    Folder(String),
}

impl ViewMode {
    /// Folder id when the view is scoped to a folder
    #[must_use]
    pub fn folder_id(&self) -> Option<&str> {
        match self {
            Self::Folder(id) => Some(id.as_str()),
            _ => None,
        }
    }
}

/// Active category filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction
    #[default]
    All,
    /// Exact, case-sensitive match on the item's category
    Named(String),
}

impl CategoryFilter {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Whether the filter currently selects `name`
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        matches!(self, Self::Named(active) if active == name)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// View filters applied to the catalog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub mode: ViewMode,
    pub category: CategoryFilter,
    pub search: String,
}

impl ViewState {
    /// Create a view state builder
    #[must_use]
    pub fn builder() -> ViewStateBuilder {
        ViewStateBuilder::default()
    }

    /// Back to all items, all categories and an empty search
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Builder for `ViewState`
#[derive(Debug, Clone, Default)]
pub struct ViewStateBuilder {
    state: ViewState,
}

impl ViewStateBuilder {
    #[must_use]
    pub fn mode(mut self, mode: ViewMode) -> Self {
        self.state.mode = mode;
        self
    }

    #[must_use]
    pub fn bookmarks(self) -> Self {
        self.mode(ViewMode::Bookmarks)
    }

    #[must_use]
    pub fn folder(self, id: impl Into<String>) -> Self {
        self.mode(ViewMode::Folder(id.into()))
    }

    #[must_use]
    pub fn category(mut self, name: impl Into<String>) -> Self {
        self.state.category = CategoryFilter::Named(name.into());
        self
    }

    #[must_use]
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.state.search = query.into();
        self
    }

    #[must_use]
    pub fn build(self) -> ViewState {
        self.state
    }
}
