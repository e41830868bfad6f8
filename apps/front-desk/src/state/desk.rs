//! # Desk State
//!
//! The one shared `Library` behind the front desk.
//!
//! ## Thread Safety
//! The whole library (catalog, members, open flag, current member, clock
//! handle) is one unit of state behind one `Mutex`. Multi-step operations
//! such as "serve Alice, then check out" must run inside a single
//! [`DeskState::with_library_mut`] call to be seen as one step by others.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   command A ──┐                                                         │
//! │               ├──► lock ──► Library::check_out ──► unlock               │
//! │   command B ──┘      (B waits until A is done)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use circulation_catalog::load_catalog;
use circulation_core::{Calendar, Library};
use tracing::{info, warn};

use super::DeskConfig;
use crate::error::ApiError;

/// Shared handle to the desk's library.
#[derive(Debug, Clone)]
pub struct DeskState {
    library: Arc<Mutex<Library>>,
}

impl DeskState {
    pub fn new(library: Library) -> Self {
        DeskState {
            library: Arc::new(Mutex::new(library)),
        }
    }

    /// Creates the calendar, loads the configured catalog and builds a
    /// closed library around them.
    pub fn from_config(config: &DeskConfig) -> Result<Self, ApiError> {
        let entries = match &config.catalog_path {
            Some(path) => load_catalog(path)?,
            None => {
                warn!("No catalog configured, starting with an empty catalog");
                Vec::new()
            }
        };

        let calendar = Arc::new(Calendar::new());
        let library = Library::new(calendar, entries);
        info!(
            library = %config.library_name,
            books = library.available_count(),
            "Front desk ready"
        );

        Ok(Self::new(library))
    }

    /// The library's clock. Reading the day through it takes no lock.
    pub fn calendar(&self) -> Arc<Calendar> {
        self.with_library(|lib| Arc::clone(lib.calendar()))
    }

    /// Executes a function with read access to the library.
    pub fn with_library<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Library) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the library.
    ///
    /// ## Usage
    /// ```rust
    /// # use std::sync::Arc;
    /// # use circulation_core::{Calendar, Library};
    /// # use front_desk::state::DeskState;
    /// let desk = DeskState::new(Library::new(Arc::new(Calendar::new()), [("Emma", "Jane Austen")]));
    /// let msg = desk.with_library_mut(|lib| {
    ///     lib.open()?;
    ///     lib.issue_card("Alice")?;
    ///     lib.check_out(&[1])
    /// });
    /// assert_eq!(msg.unwrap(), "1 book has been checked out to Alice.");
    /// ```
    pub fn with_library_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Library) -> R,
    {
        f(&mut self.lock())
    }

    /// Each single `Library` operation validates before it mutates and
    /// leaves the library consistent. A closure that panics between two
    /// operations keeps the ones that already ran. Recover the guard.
    fn lock(&self) -> MutexGuard<'_, Library> {
        self.library.lock().unwrap_or_else(|poisoned| {
            warn!("Library mutex poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use circulation_core::{CirculationError, MAX_BOOKS_PER_MEMBER};

    use super::*;
    use crate::error::ErrorCode;

    fn desk(books: usize) -> DeskState {
        let entries: Vec<(String, String)> = (1..=books)
            .map(|i| (format!("Volume {i}"), "Anon".to_string()))
            .collect();
        DeskState::new(Library::new(Arc::new(Calendar::new()), entries))
    }

    #[test]
    fn test_from_config_loads_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1984\tGeorge Orwell").unwrap();
        writeln!(file, "Emma\tJane Austen").unwrap();

        let config = DeskConfig {
            catalog_path: Some(file.path().to_path_buf()),
            ..DeskConfig::default()
        };
        let desk = DeskState::from_config(&config).unwrap();

        desk.with_library(|lib| {
            assert_eq!(lib.available_count(), 2);
            assert!(!lib.is_open());
            assert_eq!(lib.today(), 0);
        });
    }

    #[test]
    fn test_from_config_without_catalog() {
        let desk = DeskState::from_config(&DeskConfig::default()).unwrap();
        assert_eq!(desk.with_library(|lib| lib.search("anything")), "No books found.");
    }

    #[test]
    fn test_from_config_bad_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "no tab").unwrap();

        let config = DeskConfig {
            catalog_path: Some(file.path().to_path_buf()),
            ..DeskConfig::default()
        };
        let err = DeskState::from_config(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogError);
    }

    #[test]
    fn test_clones_share_one_library() {
        let desk = desk(2);
        let other = desk.clone();

        desk.with_library_mut(|lib| lib.open()).unwrap();
        assert!(other.with_library(Library::is_open));
    }

    #[test]
    fn test_calendar_reads_without_lock() {
        let desk = desk(1);
        let calendar = desk.calendar();

        desk.with_library_mut(|lib| lib.open()).unwrap();
        let guard = desk.lock();
        assert_eq!(calendar.date(), 1);
        assert!(guard.is_open());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_checkouts_respect_limit() {
        let desk = desk(10);
        desk.with_library_mut(|lib| {
            lib.open()?;
            lib.issue_card("Alice")
        })
        .unwrap();

        let handles: Vec<_> = (1..=10)
            .map(|id| {
                let desk = desk.clone();
                tokio::task::spawn_blocking(move || {
                    desk.with_library_mut(|lib| {
                        lib.serve("Alice")?;
                        lib.check_out(&[id])
                    })
                })
            })
            .collect();

        let mut granted = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => granted += 1,
                Err(err) => assert!(matches!(err, CirculationError::LimitExceeded { .. })),
            }
        }

        assert_eq!(granted, MAX_BOOKS_PER_MEMBER);
        desk.with_library(|lib| {
            let alice = lib.member("Alice").unwrap();
            assert_eq!(alice.held_count(), MAX_BOOKS_PER_MEMBER);
            assert_eq!(lib.available_count(), 10 - MAX_BOOKS_PER_MEMBER);
            for id in alice.books() {
                assert!(lib.book(*id).unwrap().is_checked_out());
            }
        });
    }
}
