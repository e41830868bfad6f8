//! # circulation-core: Pure Circulation Logic
//!
//! This crate is the **heart** of the circulation desk. It owns the clock,
//! the catalog, the member registry and the open/closed state machine, with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Circulation Desk Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    front-desk (commands)                        │   │
//! │  │    open_library, issue_card, check_out_books, search_catalog    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Mutex<Library>                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ circulation-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ calendar  │  │   book    │  │  member   │  │  library  │  │   │
//! │  │   │ day count │  │ due date  │  │ held set  │  │ state mc. │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL CLOCK • EXPLICIT ERRORS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │              circulation-catalog (file ingestion)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calendar`] - Shared integer day counter
//! - [`book`] - Catalog entries and their due dates
//! - [`member`] - Registered patrons and the books they hold
//! - [`library`] - The desk state machine and every circulation operation
//! - [`validation`] - Input rules (search length, catalog fields)
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use circulation_core::{Calendar, Library};
//!
//! let calendar = Arc::new(Calendar::new());
//! let mut library = Library::new(calendar, [("1984", "George Orwell")]);
//!
//! assert_eq!(library.open().unwrap(), "Today is day 1.");
//! assert_eq!(library.issue_card("Alice").unwrap(), "Library card issued to Alice.");
//! assert_eq!(
//!     library.check_out(&[1]).unwrap(),
//!     "1 book has been checked out to Alice."
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod book;
pub mod calendar;
pub mod error;
pub mod library;
pub mod member;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use book::{Book, BookId};
pub use calendar::Calendar;
pub use error::{CirculationError, CoreResult, ValidationError};
pub use library::{CatalogEntry, Library};
pub use member::Member;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Days a book may be kept before it becomes overdue.
///
/// Applied on checkout and again on every renewal: `due = today + 7`.
pub const LOAN_PERIOD_DAYS: u32 = 7;

/// Maximum number of books a single member may hold at once.
pub const MAX_BOOKS_PER_MEMBER: usize = 3;

/// Minimum length of a catalog search string, in characters.
pub const MIN_SEARCH_CHARS: usize = 4;
