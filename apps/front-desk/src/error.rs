//! # API Error Type
//!
//! Unified error type for desk commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow at the Front Desk                         │
//! │                                                                         │
//! │  check_out_books(&desk, &[1, 2])                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<String, ApiError>                                        │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Rule violated? ─── CirculationError::LimitExceeded ──┐          │  │
//! │  │         │                                             │          │  │
//! │  │         ▼                                             ▼          │  │
//! │  │  Catalog broken? ── CatalogError::MalformedRecord ─ ApiError ───►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Callers receive a machine-readable `code` and a human-readable `message`:
//! ```json
//! { "code": "LIMIT_EXCEEDED", "message": "Alice holds 3 books and ..." }
//! ```

use circulation_catalog::CatalogError;
use circulation_core::CirculationError;
use serde::Serialize;
use thiserror::Error;

/// API error returned from desk commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// `open` while already open
    AlreadyOpen,

    /// Desk operation while closed
    NotOpen,

    /// Loan operation with nobody being served
    NoCurrentMember,

    /// Book is on loan or not in the catalog
    BookNotAvailable,

    /// Member does not hold the book
    BookNotHeld,

    /// Loan limit would be exceeded
    LimitExceeded,

    /// Catalog file is missing or malformed
    CatalogError,

    /// Configuration could not be read
    ConfigError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ConfigError, message)
    }
}

/// Converts circulation rule violations to API errors.
impl From<CirculationError> for ApiError {
    fn from(err: CirculationError) -> Self {
        let code = match err {
            CirculationError::AlreadyOpen => ErrorCode::AlreadyOpen,
            CirculationError::NotOpen => ErrorCode::NotOpen,
            CirculationError::NoCurrentMember => ErrorCode::NoCurrentMember,
            CirculationError::BookNotAvailable { .. } => ErrorCode::BookNotAvailable,
            CirculationError::BookNotHeld { .. } => ErrorCode::BookNotHeld,
            CirculationError::LimitExceeded { .. } => ErrorCode::LimitExceeded,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts catalog errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        if let CatalogError::Io { path, source } = &err {
            tracing::error!(path = %path.display(), %source, "Catalog unreadable");
        }
        ApiError::new(ErrorCode::CatalogError, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circulation_error_codes() {
        let err = ApiError::from(CirculationError::BookNotAvailable { id: 4 });
        assert_eq!(err.code, ErrorCode::BookNotAvailable);
        assert_eq!(err.message, "The library does not have book 4.");

        let err = ApiError::from(CirculationError::NotOpen);
        assert_eq!(err.code, ErrorCode::NotOpen);
    }

    #[test]
    fn test_catalog_error_code() {
        let err = ApiError::from(CatalogError::MalformedRecord { line: 2 });
        assert_eq!(err.code, ErrorCode::CatalogError);
        assert!(err.message.starts_with("Line 2"));
    }

    #[test]
    fn test_serialization() {
        let err = ApiError::from(CirculationError::NoCurrentMember);
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "NO_CURRENT_MEMBER");
        assert_eq!(json["message"], "No member is currently being served.");
    }

    #[test]
    fn test_display() {
        let err = ApiError::from(CirculationError::AlreadyOpen);
        assert_eq!(err.to_string(), "[AlreadyOpen] The library is already open!");
    }
}
