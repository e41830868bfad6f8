//! # Book
//!
//! A catalog entry. Bibliographic fields are frozen at load time; only the
//! due date changes over the book's life.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Book                                                           │
//! │  ─────────────                                                  │
//! │  id        1, 2, 3 ... in catalog load order (immutable)        │
//! │  title     "1984"                                               │
//! │  author    "George Orwell"                                      │
//! │  due_date  None on the shelf, Some(day) while on loan           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::Serialize;

/// Catalog identifier, assigned sequentially from 1.
pub type BookId = u32;

/// A book in the library's catalog.
///
/// `Book` does not know whether it is allowed to be checked out; the
/// [`Library`](crate::Library) only calls [`Book::check_out`] on books it has
/// just taken out of the available pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    due_date: Option<u32>,
}

impl Book {
    /// Creates a book that is on the shelf.
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Book {
            id,
            title: title.into(),
            author: author.into(),
            due_date: None,
        }
    }

    #[inline]
    pub fn id(&self) -> BookId {
        self.id
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Day the book is due back, or `None` while it is on the shelf.
    #[inline]
    pub fn due_date(&self) -> Option<u32> {
        self.due_date
    }

    #[inline]
    pub fn is_checked_out(&self) -> bool {
        self.due_date.is_some()
    }

    /// A book is overdue once today is strictly past its due date.
    ///
    /// A book due today is not overdue.
    pub fn is_overdue(&self, today: u32) -> bool {
        self.due_date.is_some_and(|due| due < today)
    }

    /// Case-insensitive substring match against title or author.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }

    /// Marks the book as on loan until `due_date`.
    pub fn check_out(&mut self, due_date: u32) {
        self.due_date = Some(due_date);
    }

    /// Marks the book as back on the shelf.
    pub fn check_in(&mut self) {
        self.due_date = None;
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}, by {}", self.id, self.title, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orwell() -> Book {
        Book::new(1, "1984", "George Orwell")
    }

    #[test]
    fn test_book_fields() {
        let book = orwell();
        assert_eq!(book.id(), 1);
        assert_eq!(book.title(), "1984");
        assert_eq!(book.author(), "George Orwell");
        assert_eq!(book.due_date(), None);
    }

    #[test]
    fn test_book_check_out_and_in() {
        let mut book = orwell();

        book.check_out(14);
        assert_eq!(book.due_date(), Some(14));
        assert!(book.is_checked_out());

        book.check_in();
        assert_eq!(book.due_date(), None);
        assert!(!book.is_checked_out());
    }

    #[test]
    fn test_book_overdue_is_strict() {
        let mut book = orwell();
        assert!(!book.is_overdue(100));

        book.check_out(8);
        assert!(!book.is_overdue(7));
        assert!(!book.is_overdue(8));
        assert!(book.is_overdue(9));
    }

    #[test]
    fn test_book_matches_title_or_author() {
        let book = orwell();
        assert!(book.matches("orwell"));
        assert!(book.matches("1984"));
        assert!(book.matches("ge or"));
        assert!(!book.matches("huxley"));
    }

    #[test]
    fn test_book_display() {
        assert_eq!(orwell().to_string(), "1: 1984, by George Orwell");
    }

    #[test]
    fn test_book_serializes_camel_case() {
        let mut book = orwell();
        book.check_out(8);
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["dueDate"], 8);
        assert_eq!(json["author"], "George Orwell");
    }
}
