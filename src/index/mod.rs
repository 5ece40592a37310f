//! Favorite and folder membership indexes
//!
//! Both structures hold item ids only. Neither is compacted when an item is
//! deleted: a stale id is harmless because every view joins against the live
//! catalog.

pub mod favorites;
pub mod folders;

pub use favorites::FavoriteSet;
pub use folders::{DEFAULT_FOLDER_ID, DEFAULT_FOLDER_NAME, Folder, FolderIndex};
