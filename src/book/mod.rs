//! Book Module
//!
//! The Book record and everything needed to create one.
//!
//! ## Responsibilities
//! - Define the stored record and its JSON shape
//! - Sanitize raw form input into validated fields
//! - Issue unique ids
//!
//! ## Stored Format
//! ```text
//! {"id":1700000000000,"title":"Laskar Pelangi","author":"Andrea Hirata","year":2005,"isComplete":false}
//! ```

mod id;
mod payload;

pub use id::IdGenerator;
pub use payload::{parse_year, BookFields, BookPayload};

use serde::{Deserialize, Serialize};

/// Unique identifier of a book
pub type BookId = u64;

/// A single book on the shelf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Assigned once at creation, never reassigned
    pub id: BookId,

    pub title: String,

    pub author: String,

    pub year: i64,

    #[serde(rename = "isComplete")]
    pub is_complete: bool,
}

impl Book {
    /// Create a book from already validated fields
    pub fn new(id: BookId, fields: BookFields) -> Self {
        Self {
            id,
            title: fields.title,
            author: fields.author,
            year: fields.year,
            is_complete: fields.is_complete,
        }
    }

    /// Overwrite every field except the id
    pub fn apply(&mut self, fields: BookFields) {
        self.title = fields.title;
        self.author = fields.author;
        self.year = fields.year;
        self.is_complete = fields.is_complete;
    }

    /// Case-insensitive substring match against the title
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn title_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.title.to_lowercase().contains(needle)
    }
}
