//! # Session Commands
//!
//! Opening and closing the desk, and deciding who is at the counter.
//!
//! ## Desk Day
//! ```text
//! ┌──────────┐  open_library   ┌──────────┐  issue_card / serve_member  ┌───────────┐
//! │  Closed  │ ──────────────► │   Open   │ ──────────────────────────► │  Serving  │
//! └──────────┘                 └──────────┘                             └───────────┘
//!      ▲                                                                      │
//!      └──────────────────────────── close_library ───────────────────────────┘
//! ```

use circulation_core::Library;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::DeskState;

/// Snapshot of the desk for status displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeskStatus {
    pub is_open: bool,
    pub day: u32,
    pub current_member: Option<String>,
    pub catalog_size: usize,
    pub available_count: usize,
    pub member_count: usize,
}

impl From<&Library> for DeskStatus {
    fn from(lib: &Library) -> Self {
        DeskStatus {
            is_open: lib.is_open(),
            day: lib.today(),
            current_member: lib.current_member().map(|m| m.name().to_string()),
            catalog_size: lib.books().count(),
            available_count: lib.available_count(),
            member_count: lib.members().len(),
        }
    }
}

/// Opens the library for the next day.
pub fn open_library(desk: &DeskState) -> Result<String, ApiError> {
    debug!("open_library command");
    Ok(desk.with_library_mut(Library::open)?)
}

/// Closes the library and clears the counter.
pub fn close_library(desk: &DeskState) -> Result<String, ApiError> {
    debug!("close_library command");
    Ok(desk.with_library_mut(Library::close)?)
}

/// Issues a card to `name` and serves them.
pub fn issue_card(desk: &DeskState, name: &str) -> Result<String, ApiError> {
    debug!(name, "issue_card command");
    Ok(desk.with_library_mut(|lib| lib.issue_card(name))?)
}

/// Calls `name` to the counter.
pub fn serve_member(desk: &DeskState, name: &str) -> Result<String, ApiError> {
    debug!(name, "serve_member command");
    Ok(desk.with_library_mut(|lib| lib.serve(name))?)
}

/// Farewell message. Never fails and changes nothing.
pub fn quit(desk: &DeskState) -> String {
    debug!("quit command");
    desk.with_library(|lib| lib.quit().to_string())
}

/// Current desk status.
pub fn desk_status(desk: &DeskState) -> DeskStatus {
    desk.with_library(|lib| DeskStatus::from(lib))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use circulation_core::Calendar;

    use super::*;
    use crate::error::ErrorCode;

    fn desk() -> DeskState {
        DeskState::new(Library::new(
            Arc::new(Calendar::new()),
            [("1984", "George Orwell"), ("Emma", "Jane Austen")],
        ))
    }

    #[test]
    fn test_open_and_close() {
        let desk = desk();

        assert_eq!(open_library(&desk).unwrap(), "Today is day 1.");
        assert_eq!(open_library(&desk).unwrap_err().code, ErrorCode::AlreadyOpen);
        assert_eq!(close_library(&desk).unwrap(), "Good night.");
        assert_eq!(close_library(&desk).unwrap_err().code, ErrorCode::NotOpen);
        assert_eq!(open_library(&desk).unwrap(), "Today is day 2.");
    }

    #[test]
    fn test_issue_card_and_serve() {
        let desk = desk();
        assert_eq!(issue_card(&desk, "Alice").unwrap_err().code, ErrorCode::NotOpen);

        open_library(&desk).unwrap();
        assert_eq!(issue_card(&desk, "Alice").unwrap(), "Library card issued to Alice.");
        assert_eq!(
            issue_card(&desk, "Alice").unwrap(),
            "Alice already has a library card."
        );
        assert_eq!(
            serve_member(&desk, "Bob").unwrap(),
            "Bob does not have a library card."
        );
        assert_eq!(serve_member(&desk, "Alice").unwrap(), "Now serving Alice.");
    }

    #[test]
    fn test_quit() {
        let desk = desk();
        assert_eq!(quit(&desk), "The library is now closed for renovations.");
        assert!(!desk_status(&desk).is_open);
    }

    #[test]
    fn test_desk_status() {
        let desk = desk();
        open_library(&desk).unwrap();
        issue_card(&desk, "Alice").unwrap();

        let status = desk_status(&desk);
        assert_eq!(
            status,
            DeskStatus {
                is_open: true,
                day: 1,
                current_member: Some("Alice".to_string()),
                catalog_size: 2,
                available_count: 2,
                member_count: 1,
            }
        );

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["currentMember"], "Alice");
        assert_eq!(json["isOpen"], true);
    }
}
