//! Book id generation
//!
//! Ids stay in the unix-millisecond range so they look like creation
//! timestamps, but are forced strictly increasing.

use std::time::{SystemTime, UNIX_EPOCH};

use super::BookId;

/// Monotonic id source
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    /// Last id handed out (or the largest id seen on load)
    last: BookId,
}

impl IdGenerator {
    /// Start after the largest id already in use
    pub fn seeded(last: BookId) -> Self {
        Self { last }
    }

    /// Issue the next id: `max(now_ms, last + 1)`
    pub fn next_id(&mut self) -> BookId {
        let id = now_millis().max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    /// Largest id issued or seeded so far
    pub fn last(&self) -> BookId {
        self.last
    }
}

fn now_millis() -> BookId {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as BookId)
        .unwrap_or(0)
}
