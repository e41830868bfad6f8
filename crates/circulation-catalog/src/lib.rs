//! # circulation-catalog: Catalog Ingestion
//!
//! Turns the tab-delimited catalog file into the ordered list of
//! [`CatalogEntry`] values that [`Library::new`](circulation_core::Library::new)
//! numbers from 1.
//!
//! ## Usage
//! ```rust,no_run
//! use std::sync::Arc;
//! use circulation_catalog::load_catalog;
//! use circulation_core::{Calendar, Library};
//!
//! let entries = load_catalog("books.tsv")?;
//! let library = Library::new(Arc::new(Calendar::new()), entries);
//! # Ok::<(), circulation_catalog::CatalogError>(())
//! ```

pub mod error;
pub mod loader;

pub use circulation_core::CatalogEntry;
pub use error::{CatalogError, CatalogResult};
pub use loader::{load_catalog, parse_catalog};
