//! Book form session
//!
//! Tracks whether the add/edit form is adding a new book or editing an
//! existing one, and routes a submit accordingly.

use crate::book::{BookId, BookPayload};
use crate::error::Result;
use crate::storage::KeyValueStorage;
use crate::store::{BookStore, Outcome};

/// State of the add/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    /// Book being edited; `None` means the form adds
    editing: Option<BookId>,
}

impl BookForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the book being edited, if any
    pub fn editing(&self) -> Option<BookId> {
        self.editing
    }

    /// Switch to editing `id` and return the values to pre-fill
    ///
    /// An unknown id leaves the form as it was.
    pub fn begin_edit<S: KeyValueStorage>(
        &mut self,
        store: &BookStore<S>,
        id: BookId,
    ) -> Option<BookPayload> {
        let book = store.get(id)?;
        self.editing = Some(id);

        Some(
            BookPayload::new(book.title.clone(), book.author.clone(), book.year)
                .complete(book.is_complete),
        )
    }

    /// Submit the form
    ///
    /// Updates the edited book or adds a new one. On success the form goes
    /// back to adding; on error it keeps its mode.
    pub fn submit<S: KeyValueStorage>(
        &mut self,
        store: &mut BookStore<S>,
        payload: &BookPayload,
    ) -> Result<Outcome> {
        let outcome = match self.editing {
            Some(id) => {
                if store.update(id, payload)? {
                    Outcome::Updated(id)
                } else {
                    Outcome::NotFound(id)
                }
            }
            None => Outcome::Added(store.add(payload)?),
        };

        self.reset();
        Ok(outcome)
    }

    /// Back to adding
    pub fn reset(&mut self) {
        self.editing = None;
    }

    /// Text of the submit button
    ///
    /// In add mode it names the shelf the new book will land on.
    pub fn submit_label(&self, is_complete: bool) -> String {
        match self.editing {
            Some(_) => "Save changes".to_string(),
            None => format!("Add book to the {} shelf", shelf_name(is_complete)),
        }
    }
}

/// Display name of the shelf for a completion flag
pub fn shelf_name(is_complete: bool) -> &'static str {
    if is_complete {
        "Finished"
    } else {
        "Unfinished"
    }
}
