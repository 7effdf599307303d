//! Plain-text rendering of the shelves
//!
//! ```text
//! Unfinished
//!   [1700000000000] Laskar Pelangi by Andrea Hirata (2005)
//!
//! Finished
//!   (empty)
//! ```

use crate::book::Book;
use crate::form::shelf_name;
use crate::store::Shelves;

/// Render both shelves, unfinished first
pub fn render_shelves(view: &Shelves<'_>) -> String {
    let mut out = String::new();
    render_shelf(&mut out, shelf_name(false), &view.incomplete);
    out.push('\n');
    render_shelf(&mut out, shelf_name(true), &view.complete);
    out
}

/// One line per book
pub fn render_book(book: &Book) -> String {
    format!(
        "[{}] {} by {} ({})",
        book.id, book.title, book.author, book.year
    )
}

fn render_shelf(out: &mut String, name: &str, books: &[&Book]) {
    out.push_str(name);
    out.push('\n');
    if books.is_empty() {
        out.push_str("  (empty)\n");
        return;
    }
    for book in books {
        out.push_str("  ");
        out.push_str(&render_book(book));
        out.push('\n');
    }
}
