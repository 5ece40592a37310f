//! Selection cursor over the visible list
//!
//! The cursor remembers which item is open in the detail view by id, not by
//! index: the visible list is rebuilt after every change and indices do not
//! survive that. Validity is checked lazily whenever the cursor is resolved
//! against a freshly computed list.

use crate::catalog::Item;

/// Direction for cyclic navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    /// Index reached by one step from `index` in a list of `len` items
    ///
    /// Wraps around at both ends. `len` must be non-zero.
    #[must_use]
    pub const fn step(self, index: usize, len: usize) -> usize {
        match self {
            Self::Next => (index + 1) % len,
            Self::Prev => (index + len - 1) % len,
        }
    }
}

/// The currently open item, tracked by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    open: Option<String>,
}

impl SelectionCursor {
    #[must_use]
    pub const fn new() -> Self {
        Self { open: None }
    }

    /// Open an item; existence is only checked on lookup
    pub fn open(&mut self, id: impl Into<String>) {
        self.open = Some(id.into());
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// Raw open id, whether or not it is still visible
    #[must_use]
    pub fn open_id(&self) -> Option<&str> {
        self.open.as_deref()
    }

    /// Whether the cursor points at `id`
    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }

    /// Resolve the open id against the visible list
    ///
    /// Returns `None` when nothing is open or the open item no longer passes
    /// the active filters, in which case the detail view should close.
    #[must_use]
    pub fn current_item<'a>(&self, visible: &[&'a Item]) -> Option<&'a Item> {
        let id = self.open.as_deref()?;
        visible.iter().copied().find(|item| item.id == id)
    }

    /// Move to the next or previous visible item, wrapping at the ends
    ///
    /// Does nothing when the list has fewer than two items or the open item
    /// is not in it. Returns `true` if the cursor moved.
    pub fn navigate(&mut self, direction: Direction, visible: &[&Item]) -> bool {
        if visible.len() <= 1 {
            return false;
        }
        let Some(id) = self.open.as_deref() else {
            return false;
        };
        let Some(index) = visible.iter().position(|item| item.id == id) else {
            return false;
        };
        let target = direction.step(index, visible.len());
        self.open = Some(visible[target].id.clone());
        true
    }
}
