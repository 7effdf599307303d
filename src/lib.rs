//! # Bookshelf
//!
//! A personal library tracker with:
//! - Validated add/edit of books (title, author, year, finished flag)
//! - Case-insensitive title search split into unfinished/finished shelves
//! - Whole-collection persistence to a key-value backend after every change
//! - Lenient loading: missing or corrupt data starts an empty shelf
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 CLI  /  BookForm (add | edit)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ BookPayload
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        BookStore                            │
//! │            Vec<Book> + keyword + IdGenerator                │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │ save_books / load_books          │ on_refresh
//!            ▼                                  ▼
//!   ┌──────────────────┐               ┌─────────────────┐
//!   │ KeyValueStorage  │               │     Shelves     │
//!   │ (Memory | File)  │               │  render_shelves │
//!   └──────────────────┘               └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod book;
pub mod storage;
pub mod store;
pub mod form;
pub mod render;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use book::{Book, BookId, BookPayload};
pub use config::Config;
pub use error::{BookshelfError, Result};
pub use form::BookForm;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{BookStore, Shelves};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Bookshelf
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
