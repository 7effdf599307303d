//! Book input payload
//!
//! Raw form input and its sanitization into validated fields.

use crate::error::{BookshelfError, Result};

/// Raw input as typed into the add/edit form
///
/// Nothing here is trusted: strings may carry whitespace and the year is
/// whatever text the user entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPayload {
    pub title: String,
    pub author: String,
    pub year: String,
    pub is_complete: bool,
}

/// Validated, normalized book fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub year: i64,
    pub is_complete: bool,
}

impl BookPayload {
    /// Create a payload for an unfinished book
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl ToString,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.to_string(),
            is_complete: false,
        }
    }

    /// Set the completion flag
    pub fn complete(mut self, is_complete: bool) -> Self {
        self.is_complete = is_complete;
        self
    }

    /// Trim strings and parse the year
    ///
    /// Fails with [`BookshelfError::InvalidInput`] when the title or author
    /// is blank or the year has no leading digits.
    pub fn sanitize(&self) -> Result<BookFields> {
        let title = self.title.trim();
        let author = self.author.trim();
        let year = parse_year(&self.year);

        match (title.is_empty(), author.is_empty(), year) {
            (false, false, Some(year)) => Ok(BookFields {
                title: title.to_string(),
                author: author.to_string(),
                year,
                is_complete: self.is_complete,
            }),
            _ => Err(BookshelfError::InvalidInput),
        }
    }
}

/// Parse a year the lenient way a form field is read
///
/// Surrounding whitespace is ignored, an optional sign is accepted, and the
/// leading run of ASCII digits is taken; anything after it is dropped
/// (`"2020abc"` is 2020, `"12.5"` is 12). Returns `None` when there are no
/// digits or the value overflows.
pub fn parse_year(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
