//! Store Module
//!
//! The book store: the in-memory collection plus persistence glue.
//!
//! ## Responsibilities
//! - Own the ordered book collection and the search keyword
//! - Validate input and apply add/update/toggle/delete
//! - Overwrite storage after every mutation
//! - Notify the presentation layer with the current view
//!
//! ## Mutation Flow
//! ```text
//!   payload ──sanitize──▶ mutate Vec<Book> ──save_books──▶ storage
//!                                                │
//!                                                ▼
//!                                   on_refresh(Shelves for keyword)
//! ```

mod command;
mod view;

pub use command::{Command, Outcome};
pub use view::Shelves;

use crate::book::{Book, BookId, BookPayload, IdGenerator};
use crate::config::Config;
use crate::error::Result;
use crate::storage::{load_books, save_books, FileStorage, KeyValueStorage};

/// Callback invoked with the current view after a state change
pub type RefreshHook = Box<dyn FnMut(&Shelves<'_>)>;

/// The book store
///
/// Single owner, single thread: every method runs to completion and writes
/// the whole collection back to storage before returning.
pub struct BookStore<S: KeyValueStorage> {
    /// Backend the collection is persisted to
    storage: S,

    /// Key the JSON array lives under
    key: String,

    /// Books in insertion order
    books: Vec<Book>,

    /// Current search keyword
    keyword: String,

    ids: IdGenerator,

    on_refresh: Option<RefreshHook>,
}

impl BookStore<FileStorage> {
    /// Open the file-backed store described by `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let storage = FileStorage::open(&config.data_dir)?;
        Ok(Self::open(storage, &config.storage_key))
    }
}

impl<S: KeyValueStorage> BookStore<S> {
    /// Load the collection stored under `key`
    ///
    /// Missing or malformed data starts an empty collection.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let books = load_books(&storage, &key);
        let ids = IdGenerator::seeded(max_id(&books));

        tracing::info!(key = %key, count = books.len(), "book store opened");

        Self {
            storage,
            key,
            books,
            keyword: String::new(),
            ids,
            on_refresh: None,
        }
    }

    /// Register the presentation callback
    pub fn on_refresh(&mut self, hook: impl FnMut(&Shelves<'_>) + 'static) {
        self.on_refresh = Some(Box::new(hook));
    }

    /// Re-read the collection from storage, dropping in-memory state
    pub fn reload(&mut self) {
        self.books = load_books(&self.storage, &self.key);
        self.ids = IdGenerator::seeded(max_id(&self.books).max(self.ids.last()));
        self.refresh();
    }

    /// Execute a command
    ///
    /// Routes commands to the matching operation.
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Add { payload } => self.add(&payload).map(Outcome::Added),
            Command::Update { id, payload } => Ok(if self.update(id, &payload)? {
                Outcome::Updated(id)
            } else {
                Outcome::NotFound(id)
            }),
            Command::Toggle { id } => Ok(match self.toggle_complete(id)? {
                Some(is_complete) => Outcome::Toggled { id, is_complete },
                None => Outcome::NotFound(id),
            }),
            Command::Delete { id } => Ok(if self.delete(id)? {
                Outcome::Deleted(id)
            } else {
                Outcome::NotFound(id)
            }),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Validate `payload` and append a new book
    ///
    /// Returns the id of the new book. Invalid input or a failed save
    /// leaves the collection untouched.
    pub fn add(&mut self, payload: &BookPayload) -> Result<BookId> {
        let fields = payload.sanitize()?;
        let id = self.ids.next_id();
        self.books.push(Book::new(id, fields));

        if let Err(e) = self.commit() {
            self.books.pop();
            return Err(e);
        }
        tracing::debug!(id, "book added");
        Ok(id)
    }

    /// Replace the fields of book `id` with the validated `payload`
    ///
    /// Returns `Ok(false)` without validating when `id` is unknown.
    pub fn update(&mut self, id: BookId, payload: &BookPayload) -> Result<bool> {
        let Some(idx) = self.position(id) else {
            return Ok(false);
        };
        let fields = payload.sanitize()?;
        let previous = self.books[idx].clone();
        self.books[idx].apply(fields);

        if let Err(e) = self.commit() {
            self.books[idx] = previous;
            return Err(e);
        }
        tracing::debug!(id, "book updated");
        Ok(true)
    }

    /// Flip the completion flag of book `id`
    ///
    /// Returns the new flag, or `None` if `id` is unknown.
    pub fn toggle_complete(&mut self, id: BookId) -> Result<Option<bool>> {
        let Some(idx) = self.position(id) else {
            return Ok(None);
        };
        let is_complete = !self.books[idx].is_complete;
        self.books[idx].is_complete = is_complete;

        if let Err(e) = self.commit() {
            self.books[idx].is_complete = !is_complete;
            return Err(e);
        }
        tracing::debug!(id, is_complete, "book toggled");
        Ok(Some(is_complete))
    }

    /// Remove book `id`
    ///
    /// Returns whether a book was removed.
    pub fn delete(&mut self, id: BookId) -> Result<bool> {
        let Some(idx) = self.position(id) else {
            return Ok(false);
        };
        let removed = self.books.remove(idx);

        if let Err(e) = self.commit() {
            self.books.insert(idx, removed);
            return Err(e);
        }
        tracing::debug!(id, "book deleted");
        Ok(true)
    }

    /// Set the search keyword and refresh the view
    ///
    /// Surrounding whitespace is dropped.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into().trim().to_string();
        self.refresh();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Books whose title contains `keyword` (any case, trimmed), split by flag
    pub fn query(&self, keyword: &str) -> Shelves<'_> {
        Shelves::filter(&self.books, keyword.trim())
    }

    /// The view for the current keyword
    pub fn view(&self) -> Shelves<'_> {
        self.query(&self.keyword)
    }

    /// Look up a book by id
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// All books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    /// Persist then refresh; a failed save skips the refresh and the caller
    /// undoes its change
    fn commit(&mut self) -> Result<()> {
        save_books(&self.storage, &self.key, &self.books)?;
        self.refresh();
        Ok(())
    }

    fn refresh(&mut self) {
        if let Some(hook) = self.on_refresh.as_mut() {
            let view = Shelves::filter(&self.books, &self.keyword);
            hook(&view);
        }
    }
}

fn max_id(books: &[Book]) -> BookId {
    books.iter().map(|b| b.id).max().unwrap_or(0)
}
