//! Catalog-specific error types
//!
//! This module defines the errors raised by catalog and session mutations.
//! Each error aborts the operation before anything is written, so callers
//! can surface the message and leave state untouched.
//!
//! # Error Types
//!
//! - **`Validation`**: A required field is missing or empty
//! - **`DuplicateName`**: Another item already uses the name (case-insensitive)
//! - **`NotFound`**: The referenced item does not exist
//! - **`Locked`**: The item is locked against edits
//! - **`AdminRequired`**: The operation is only available in admin mode

use thiserror::Error;

/// Catalog mutation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A required field is missing or empty
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An item with the same name already exists
    #[error("An item named '{0}' already exists")]
    DuplicateName(String),

    /// The referenced item does not exist
    #[error("Item not found: {0}")]
    NotFound(String),

    /// The item is locked and cannot be edited
    #[error("Item is locked: {0}")]
    Locked(String),

    /// The operation requires admin mode
    #[error("Admin mode is required for this operation")]
    AdminRequired,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
