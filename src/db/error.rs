//! Storage-specific error types
//!
//! This module defines all error types that can occur while reading or
//! writing persisted state.
//!
//! # Error Types
//!
//! - **`SledError`**: Errors from the underlying sled embedded database
//! - **`JsonError`**: Failures when serializing or parsing a stored value
//! - **`SerializeError`**: Stored bytes that are not valid UTF-8 text
//!
//! All errors implement `std::error::Error` via the `thiserror` crate. Load
//! paths treat every one of them as "keep the default"; only explicit
//! flushes surface them to the user.

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum DbError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// Represents a JSON encoding or decoding error
    #[error("Error while encoding or decoding data: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Stored value could not be read as text
    #[error("Error during serialization: {0}")]
    SerializeError(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
