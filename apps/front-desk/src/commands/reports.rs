//! # Report Commands
//!
//! Catalog listing, search and overdue reports. None of these change loans
//! or the member being served.

use circulation_core::Book;
use tracing::debug;

use crate::error::ApiError;
use crate::state::DeskState;

/// Every book in the catalog in id order, with its current due date.
pub fn list_books(desk: &DeskState) -> Vec<Book> {
    debug!("list_books command");
    desk.with_library(|lib| lib.books().cloned().collect())
}

/// Searches titles and authors across the whole catalog.
///
/// Works whether or not the library is open.
pub fn search_catalog(desk: &DeskState, query: &str) -> String {
    debug!(query, "search_catalog command");
    desk.with_library(|lib| lib.search(query))
}

/// Overdue report for the member being served.
pub fn find_overdue_books(desk: &DeskState) -> Result<String, ApiError> {
    debug!("find_overdue_books command");
    Ok(desk.with_library(|lib| lib.find_overdue_books())?)
}

/// Overdue report for every card holder.
pub fn find_all_overdue_books(desk: &DeskState) -> Result<String, ApiError> {
    debug!("find_all_overdue_books command");
    Ok(desk.with_library(|lib| lib.find_all_overdue_books())?)
}
