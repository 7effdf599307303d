//! Command definitions
//!
//! A mutation request against the store, and what it did.

use crate::book::{BookId, BookPayload};

/// A mutating store operation
#[derive(Debug, Clone)]
pub enum Command {
    /// Add a new book
    Add { payload: BookPayload },

    /// Replace the fields of an existing book
    Update { id: BookId, payload: BookPayload },

    /// Flip the completion flag
    Toggle { id: BookId },

    /// Remove a book
    Delete { id: BookId },
}

/// Result of executing a [`Command`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A book was added under this id
    Added(BookId),

    /// The book was updated
    Updated(BookId),

    /// The book's flag is now this value
    Toggled { id: BookId, is_complete: bool },

    /// The book was removed
    Deleted(BookId),

    /// The id did not match any book; nothing changed
    NotFound(BookId),
}

impl Command {
    /// Id the command targets, if it names one
    pub fn target(&self) -> Option<BookId> {
        match self {
            Command::Add { .. } => None,
            Command::Update { id, .. } | Command::Toggle { id } | Command::Delete { id } => {
                Some(*id)
            }
        }
    }
}
