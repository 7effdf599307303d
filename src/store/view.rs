//! Filtered view of the collection
//!
//! Splits matching books into the unfinished and finished shelves.

use crate::book::Book;

/// Books matching a keyword, partitioned by completion flag
///
/// Both shelves keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shelves<'a> {
    pub incomplete: Vec<&'a Book>,
    pub complete: Vec<&'a Book>,
}

impl<'a> Shelves<'a> {
    /// Partition `books` whose title contains `keyword`, ignoring case
    ///
    /// An empty keyword matches every book.
    pub fn filter(books: &'a [Book], keyword: &str) -> Self {
        let needle = keyword.to_lowercase();
        let (complete, incomplete): (Vec<&Book>, Vec<&Book>) = books
            .iter()
            .filter(|b| b.title_contains(&needle))
            .partition(|b| b.is_complete);

        Self {
            incomplete,
            complete,
        }
    }

    /// Total books across both shelves
    pub fn len(&self) -> usize {
        self.incomplete.len() + self.complete.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incomplete.is_empty() && self.complete.is_empty()
    }
}
