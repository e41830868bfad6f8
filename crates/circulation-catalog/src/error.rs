//! # Catalog Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / ValidationError                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds path and line context               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in front-desk) ← Serialized for callers                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use circulation_core::ValidationError;
use thiserror::Error;

/// Catalog ingestion errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog could not be opened or read.
    #[error("Cannot read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line has no tab separating title from author.
    #[error("Line {line}: expected \"<title>\\t<author>\"")]
    MalformedRecord { line: usize },

    /// A line has a blank title or author.
    #[error("Line {line}: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: ValidationError,
    },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CatalogError::MalformedRecord { line: 3 }.to_string(),
            "Line 3: expected \"<title>\\t<author>\""
        );

        let err = CatalogError::InvalidRecord {
            line: 5,
            source: ValidationError::Required {
                field: "author".to_string(),
            },
        };
        assert_eq!(err.to_string(), "Line 5: author is required");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = CatalogError::io(
            "/missing/books.tsv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().starts_with("Cannot read catalog /missing/books.tsv"));
    }
}
