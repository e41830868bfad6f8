//! # Desk Commands
//!
//! Every circulation operation, exposed over the shared [`DeskState`].
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── session.rs  ◄─── open, close, issue card, serve, quit, status
//! ├── loans.rs    ◄─── check out, check in, renew
//! └── reports.rs  ◄─── book list, search, overdue reports
//! ```
//!
//! ## How Commands Work
//! ```text
//! check_out_books(&desk, &[1, 2])
//!        │
//!        ▼
//! desk.with_library_mut(|lib| lib.check_out(ids))   ◄── one lock, one step
//!        │
//!        ▼
//! Result<String, CirculationError> ──► Result<String, ApiError>
//! ```
//!
//! [`DeskState`]: crate::state::DeskState

pub mod loans;
pub mod reports;
pub mod session;

pub use loans::{check_in_books, check_out_books, renew_books};
pub use reports::{find_all_overdue_books, find_overdue_books, list_books, search_catalog};
pub use session::{
    close_library, desk_status, issue_card, open_library, quit, serve_member, DeskStatus,
};
