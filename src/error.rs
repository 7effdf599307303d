//! Error types for Bookshelf
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using BookshelfError
pub type Result<T> = std::result::Result<T, BookshelfError>;

/// Unified error type for Bookshelf operations
#[derive(Debug, Error)]
pub enum BookshelfError {
    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    /// Title or author empty after trimming, or the year has no digits.
    /// Carries no detail; every validation failure reads the same.
    #[error("Please fill in the title, author and year correctly.")]
    InvalidInput,

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage error: {0}")]
    Storage(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
