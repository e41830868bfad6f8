//! # Calendar
//!
//! The single time source of the desk: an abstract integer day counter.
//!
//! There is no global instance. Whoever builds the [`Library`](crate::Library)
//! creates one calendar and hands out `Arc<Calendar>` clones to everything
//! that needs to read the date.

use std::sync::atomic::{AtomicU32, Ordering};

/// Integer day counter, starting at day 0.
///
/// Only [`Library::open`](crate::Library::open) advances it, exactly once per
/// opening. The counter never goes backwards.
#[derive(Debug, Default)]
pub struct Calendar {
    day: AtomicU32,
}

impl Calendar {
    /// Creates a calendar at day 0.
    pub const fn new() -> Self {
        Calendar {
            day: AtomicU32::new(0),
        }
    }

    /// Creates a calendar that starts at an arbitrary day.
    pub const fn starting_at(day: u32) -> Self {
        Calendar {
            day: AtomicU32::new(day),
        }
    }

    /// Returns the current circulation day.
    #[inline]
    pub fn date(&self) -> u32 {
        self.day.load(Ordering::SeqCst)
    }

    /// Moves the clock forward by one day and returns the new day.
    pub fn advance(&self) -> u32 {
        self.day.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_calendar_init() {
        assert_eq!(Calendar::new().date(), 0);
    }

    #[test]
    fn test_calendar_advance() {
        let cal = Calendar::new();
        assert_eq!(cal.advance(), 1);
        assert_eq!(cal.date(), 1);
        cal.advance();
        assert_eq!(cal.date(), 2);
    }

    #[test]
    fn test_shared_handle_sees_advance() {
        let cal = Arc::new(Calendar::starting_at(10));
        let reader = Arc::clone(&cal);

        cal.advance();
        assert_eq!(reader.date(), 11);
    }
}
