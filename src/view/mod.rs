//! Derived view over the catalog
//!
//! - [`state`]: transient view filters (mode, category, search)
//! - [`filter`]: pure computation of the visible list
//! - [`cursor`]: the open item and cyclic next/prev navigation

pub mod cursor;
pub mod filter;
pub mod state;

pub use cursor::{Direction, SelectionCursor};
pub use filter::{ItemFilterExt, visible_items};
pub use state::{CategoryFilter, ViewMode, ViewState};
