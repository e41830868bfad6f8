//! # Error Types
//!
//! Domain-specific error types for circulation-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  circulation-core errors (this file)                                    │
//! │  ├── CirculationError - Desk state and loan rule violations             │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  circulation-catalog errors (separate crate)                            │
//! │  └── CatalogError     - Catalog file failures                           │
//! │                                                                         │
//! │  front-desk errors (in app)                                             │
//! │  └── ApiError         - What callers of the desk see (serialized)       │
//! │                                                                         │
//! │  Flow: CirculationError / CatalogError → ApiError → caller              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure leaves the library exactly as it was before the call.

use thiserror::Error;

use crate::book::BookId;

// =============================================================================
// Circulation Error
// =============================================================================

/// Circulation rule violations.
///
/// All of these are fail-fast and non-retryable; the caller decides how to
/// present them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CirculationError {
    /// `open()` was called while the library was already open.
    #[error("The library is already open!")]
    AlreadyOpen,

    /// An operation that needs an open library was invoked while closed.
    #[error("The library is not open.")]
    NotOpen,

    /// A loan operation was invoked with nobody being served.
    #[error("No member is currently being served.")]
    NoCurrentMember,

    /// Checkout referenced a book that is not in the available pool.
    ///
    /// ## When This Occurs
    /// - The id is not in the catalog at all
    /// - The book is already on loan to someone
    /// - The same id appears twice in one checkout batch
    #[error("The library does not have book {id}.")]
    BookNotAvailable { id: BookId },

    /// Check-in or renewal referenced a book the member does not hold.
    #[error("{member} does not have book {id}.")]
    BookNotHeld { id: BookId, member: String },

    /// Checkout would push the member above the loan limit.
    #[error("{member} holds {held} books and cannot check out {requested} more (limit {max}).")]
    LimitExceeded {
        member: String,
        held: usize,
        requested: usize,
        max: usize,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CirculationError.
pub type CoreResult<T> = Result<T, CirculationError>;

// =============================================================================
// Unit Tests
// =============================================================================
