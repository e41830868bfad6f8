//! # Validation Module
//!
//! Input rules shared by the desk and the catalog loader.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog loader                                               │
//! │  └── validate_catalog_field: titles and authors must not be blank      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Library operations                                           │
//! │  ├── validate_search_query: at least four characters                   │
//! │  └── Loan rules (limit, availability) in library.rs                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use circulation_core::validation::{validate_catalog_field, validate_search_query};
//!
//! assert!(validate_search_query("Orwell").is_ok());
//! assert!(validate_search_query("Orw").is_err());
//! assert!(validate_catalog_field("title", "  ").is_err());
//! ```

use crate::error::ValidationError;
use crate::MIN_SEARCH_CHARS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a catalog search string.
///
/// ## Rules
/// - At least [`MIN_SEARCH_CHARS`] characters, counted as `char`s so that
///   accented titles are not penalised for their byte length
/// - Whitespace counts; the string is not trimmed
pub fn validate_search_query(query: &str) -> ValidationResult<()> {
    if query.chars().count() < MIN_SEARCH_CHARS {
        return Err(ValidationError::TooShort {
            field: "search string".to_string(),
            min: MIN_SEARCH_CHARS,
        });
    }

    Ok(())
}

/// Validates a title or author read from the catalog.
///
/// Returns the trimmed value.
pub fn validate_catalog_field<'a>(field: &str, value: &'a str) -> ValidationResult<&'a str> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_search_query() {
        assert!(validate_search_query("1984").is_ok());
        assert!(validate_search_query("George Orwell").is_ok());

        assert!(validate_search_query("").is_err());
        assert!(validate_search_query("abc").is_err());
    }

    #[test]
    fn test_validate_search_query_counts_chars() {
        // Four characters, eight bytes.
        assert!(validate_search_query("éééé").is_ok());
        assert!(validate_search_query("ééé").is_err());
    }

    #[test]
    fn test_validate_catalog_field() {
        assert_eq!(validate_catalog_field("title", " Emma ").unwrap(), "Emma");
        assert!(matches!(
            validate_catalog_field("author", "\t"),
            Err(ValidationError::Required { field }) if field == "author"
        ));
    }
}
