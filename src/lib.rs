//! figdex - A local catalog of collectible figures
//!
//! This library keeps a catalog of figure items with categories, favorites
//! and folders, and computes the filtered list a front end displays along
//! with a cyclic "currently open" selection over it. State is persisted as
//! JSON values in an embedded key-value database.
//!
//! The [`session::Session`] type is the entry point: it owns the catalog,
//! the indexes, the view state and the store, and saves after every change.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod index;
pub mod output;
pub mod session;
pub mod ui;
pub mod view;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FigdexError {
    /// Database error
    #[error("Database error: {0}")]
    DbError(#[from] db::DbError),
    /// Catalog operation rejected
    #[error("{0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Interactive prompt failed
    #[error("Input error: {0}")]
    InputError(#[from] ui::InputError),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
