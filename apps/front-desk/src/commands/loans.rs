//! # Loan Commands
//!
//! Check out, check in and renew for the member at the counter.
//!
//! Each command is one critical section: a rejected batch leaves every book
//! where it was.

use circulation_core::BookId;
use tracing::debug;

use crate::error::ApiError;
use crate::state::DeskState;

/// Lends `ids` to the member being served.
pub fn check_out_books(desk: &DeskState, ids: &[BookId]) -> Result<String, ApiError> {
    debug!(?ids, "check_out_books command");
    Ok(desk.with_library_mut(|lib| lib.check_out(ids))?)
}

/// Takes `ids` back from the member being served.
pub fn check_in_books(desk: &DeskState, ids: &[BookId]) -> Result<String, ApiError> {
    debug!(?ids, "check_in_books command");
    Ok(desk.with_library_mut(|lib| lib.check_in(ids))?)
}

/// Renews `ids` for the member being served.
pub fn renew_books(desk: &DeskState, ids: &[BookId]) -> Result<String, ApiError> {
    debug!(?ids, "renew_books command");
    Ok(desk.with_library_mut(|lib| lib.renew(ids))?)
}
