//! # Member
//!
//! A registered patron and the set of books they currently hold.
//!
//! The 3-book cap is NOT enforced here. It is a desk rule and lives in
//! [`Library::check_out`](crate::Library::check_out), which checks it before
//! calling [`Member::check_out`].

use std::collections::BTreeSet;

use tracing::info;

use crate::book::{Book, BookId};

/// A library card holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    name: String,
    held_books: BTreeSet<BookId>,
}

impl Member {
    /// Creates a member holding no books.
    pub fn new(name: impl Into<String>) -> Self {
        Member {
            name: name.into(),
            held_books: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of the books this member holds, in ascending order.
    #[inline]
    pub fn books(&self) -> &BTreeSet<BookId> {
        &self.held_books
    }

    #[inline]
    pub fn held_count(&self) -> usize {
        self.held_books.len()
    }

    #[inline]
    pub fn holds(&self, id: BookId) -> bool {
        self.held_books.contains(&id)
    }

    /// Adds a book to the held set. Adding a held book again is a no-op.
    pub fn check_out(&mut self, book: &Book) {
        self.held_books.insert(book.id());
    }

    /// Removes a book from the held set. Removing an absent book is a no-op.
    pub fn give_back(&mut self, book: &Book) {
        self.held_books.remove(&book.id());
    }

    /// Sends `text` to this member and returns the notice as delivered.
    pub fn send_overdue_notice(&self, text: &str) -> String {
        let notice = format!("{}: {}", self.name, text);
        info!(member = %self.name, %notice, "Overdue notice sent");
        notice
    }
}
