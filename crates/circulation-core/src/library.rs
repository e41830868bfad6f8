//! # Library
//!
//! The circulation desk state machine. Every operation enters here.
//!
//! ## Desk Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Desk States                                     │
//! │                                                                         │
//! │              open()  (calendar.advance())                               │
//! │   ┌──────────┐ ─────────────────────────► ┌──────────────────────────┐  │
//! │   │  Closed  │                            │           Open           │  │
//! │   │          │ ◄───────────────────────── │  current_member: Option  │  │
//! │   └──────────┘   close()  (member = None) └──────────────────────────┘  │
//! │                                                  │                      │
//! │                         issue_card / serve ──────┤ sets current member  │
//! │                 check_out / check_in / renew ────┤ need current member  │
//! │                      find_all_overdue_books ─────┘ reads every member   │
//! │                                                                         │
//! │   search() and quit() work in either state.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Book Ownership
//! Every book lives in exactly one place: the available pool, or one
//! member's held set. A book has a due date exactly when it is held.
//!
//! Batch operations validate every id before touching anything, so a failed
//! call leaves the library unchanged.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use tracing::{debug, info};

use crate::book::{Book, BookId};
use crate::calendar::Calendar;
use crate::error::{CirculationError, CoreResult};
use crate::member::Member;
use crate::validation::validate_search_query;
use crate::{LOAN_PERIOD_DAYS, MAX_BOOKS_PER_MEMBER};

// =============================================================================
// Catalog Entry
// =============================================================================

/// One (title, author) record used to seed the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: String,
    pub author: String,
}

impl CatalogEntry {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        CatalogEntry {
            title: title.into(),
            author: author.into(),
        }
    }
}

impl<T, A> From<(T, A)> for CatalogEntry
where
    T: Into<String>,
    A: Into<String>,
{
    fn from((title, author): (T, A)) -> Self {
        CatalogEntry::new(title, author)
    }
}

// =============================================================================
// Library
// =============================================================================

/// The library's circulation desk.
#[derive(Debug)]
pub struct Library {
    calendar: Arc<Calendar>,

    /// Every book ever loaded, keyed by id. Used for search.
    catalog: BTreeMap<BookId, Book>,

    /// Ids of books on the shelf.
    available: BTreeSet<BookId>,

    /// Card holders in the order their cards were issued.
    members: Vec<Member>,

    /// Name → index into `members`.
    registry: HashMap<String, usize>,

    is_open: bool,

    /// Index into `members` of the patron at the desk.
    current_member: Option<usize>,
}

impl Library {
    /// Builds a closed library whose catalog holds `entries`, numbered from 1
    /// in iteration order. Every book starts on the shelf.
    pub fn new<I>(calendar: Arc<Calendar>, entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CatalogEntry>,
    {
        let catalog: BTreeMap<BookId, Book> = (1..)
            .zip(entries)
            .map(|(id, entry)| {
                let entry: CatalogEntry = entry.into();
                (id, Book::new(id, entry.title, entry.author))
            })
            .collect();
        let available = catalog.keys().copied().collect();

        Library {
            calendar,
            catalog,
            available,
            members: Vec::new(),
            registry: HashMap::new(),
            is_open: false,
            current_member: None,
        }
    }

    // -------------------------------------------------------------------------
    // Read-only views
    // -------------------------------------------------------------------------

    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The shared clock handle.
    pub fn calendar(&self) -> &Arc<Calendar> {
        &self.calendar
    }

    #[inline]
    pub fn today(&self) -> u32 {
        self.calendar.date()
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.catalog.get(&id)
    }

    /// Every book in the catalog, in id order, wherever it currently is.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.catalog.values()
    }

    pub fn is_available(&self, id: BookId) -> bool {
        self.available.contains(&id)
    }

    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.registry.get(name).map(|&idx| &self.members[idx])
    }

    /// Card holders in registry order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// The member being served, if any.
    pub fn current_member(&self) -> Option<&Member> {
        self.current_member.map(|idx| &self.members[idx])
    }

    // -------------------------------------------------------------------------
    // Session
    // -------------------------------------------------------------------------

    /// Opens the library for a new day, advancing the calendar by one.
    pub fn open(&mut self) -> CoreResult<String> {
        if self.is_open {
            return Err(CirculationError::AlreadyOpen);
        }

        let day = self.calendar.advance();
        self.is_open = true;
        info!(day, "Library opened");

        Ok(format!("Today is day {day}."))
    }

    /// Closes the library and sends the current member home.
    pub fn close(&mut self) -> CoreResult<String> {
        self.ensure_open()?;

        self.is_open = false;
        self.current_member = None;
        info!(day = self.today(), "Library closed");

        Ok("Good night.".to_string())
    }

    /// Registers `name` and starts serving them.
    ///
    /// Issuing a second card to a known name changes nothing, not even who
    /// is being served.
    pub fn issue_card(&mut self, name: &str) -> CoreResult<String> {
        self.ensure_open()?;

        if self.registry.contains_key(name) {
            return Ok(format!("{name} already has a library card."));
        }

        let idx = self.members.len();
        self.members.push(Member::new(name));
        self.registry.insert(name.to_string(), idx);
        self.current_member = Some(idx);
        info!(member = name, "Library card issued");

        Ok(format!("Library card issued to {name}."))
    }

    /// Starts serving `name`. An unknown name leaves nobody served.
    pub fn serve(&mut self, name: &str) -> CoreResult<String> {
        self.ensure_open()?;

        self.current_member = self.registry.get(name).copied();
        debug!(member = name, found = self.current_member.is_some(), "serve");

        match self.current_member {
            Some(_) => Ok(format!("Now serving {name}.")),
            None => Ok(format!("{name} does not have a library card.")),
        }
    }

    /// Fixed farewell. Does not change any state.
    pub fn quit(&self) -> &'static str {
        "The library is now closed for renovations."
    }

    // -------------------------------------------------------------------------
    // Loans
    // -------------------------------------------------------------------------

    /// Lends the books `ids` to the current member, due in seven days.
    ///
    /// ## Validation Order
    /// ```text
    /// held + ids.len() > 3 ?   ──► LimitExceeded
    /// any id not on shelf ?    ──► BookNotAvailable   (repeats count too)
    /// otherwise                ──► move every book, set due = today + 7
    /// ```
    pub fn check_out(&mut self, ids: &[BookId]) -> CoreResult<String> {
        let idx = self.served_index()?;
        let member = &self.members[idx];
        debug!(member = member.name(), ?ids, "check_out");

        let held = member.held_count();
        if held + ids.len() > MAX_BOOKS_PER_MEMBER {
            return Err(CirculationError::LimitExceeded {
                member: member.name().to_string(),
                held,
                requested: ids.len(),
                max: MAX_BOOKS_PER_MEMBER,
            });
        }

        let mut seen = BTreeSet::new();
        for &id in ids {
            if !self.available.contains(&id) || !seen.insert(id) {
                return Err(CirculationError::BookNotAvailable { id });
            }
        }

        let due = self.today() + LOAN_PERIOD_DAYS;
        for &id in ids {
            if let Some(book) = self.catalog.get_mut(&id) {
                self.available.remove(&id);
                book.check_out(due);
                self.members[idx].check_out(book);
            }
        }

        let name = self.members[idx].name();
        Ok(match ids.len() {
            1 => format!("1 book has been checked out to {name}."),
            k => format!("{k} books have been checked out to {name}."),
        })
    }

    /// Takes the books `ids` back from the current member.
    pub fn check_in(&mut self, ids: &[BookId]) -> CoreResult<String> {
        let idx = self.served_index()?;
        let member = &self.members[idx];
        debug!(member = member.name(), ?ids, "check_in");

        let mut seen = BTreeSet::new();
        for &id in ids {
            if !member.holds(id) || !seen.insert(id) {
                return Err(CirculationError::BookNotHeld {
                    id,
                    member: member.name().to_string(),
                });
            }
        }

        for &id in ids {
            if let Some(book) = self.catalog.get_mut(&id) {
                book.check_in();
                self.members[idx].give_back(book);
                self.available.insert(id);
            }
        }

        let name = self.members[idx].name();
        Ok(match ids.len() {
            1 => format!("{name} has returned 1 book."),
            k => format!("{name} has returned {k} books."),
        })
    }

    /// Pushes the due date of the books `ids` to seven days from today.
    ///
    /// Renewing the same book twice in one call is harmless. The message
    /// counts distinct books.
    pub fn renew(&mut self, ids: &[BookId]) -> CoreResult<String> {
        let idx = self.served_index()?;
        let member = &self.members[idx];
        debug!(member = member.name(), ?ids, "renew");

        if let Some(&id) = ids.iter().find(|&&id| !member.holds(id)) {
            return Err(CirculationError::BookNotHeld {
                id,
                member: member.name().to_string(),
            });
        }

        let renewed: BTreeSet<BookId> = ids.iter().copied().collect();
        let due = self.today() + LOAN_PERIOD_DAYS;
        for id in &renewed {
            if let Some(book) = self.catalog.get_mut(id) {
                book.check_out(due);
            }
        }

        let name = self.members[idx].name();
        Ok(match renewed.len() {
            1 => format!("1 book has been renewed for {name}."),
            k => format!("{k} books have been renewed for {name}."),
        })
    }

    // -------------------------------------------------------------------------
    // Reports
    // -------------------------------------------------------------------------

    /// Overdue report for the current member.
    pub fn find_overdue_books(&self) -> CoreResult<String> {
        let idx = self.served_index()?;
        let member = &self.members[idx];

        Ok(overdue_report(member, &self.overdue_books(member)))
    }

    /// Overdue report for every card holder, in registry order.
    ///
    /// Per-member reports are concatenated, with a line break after any
    /// report ending in `"None"` so the next header starts its own line.
    /// Members with overdue books are sent a notice. The member being served
    /// stays the same.
    pub fn find_all_overdue_books(&self) -> CoreResult<String> {
        self.ensure_open()?;

        let mut report = String::new();
        let mut any_overdue = false;

        for member in &self.members {
            let overdue = self.overdue_books(member);
            if !overdue.is_empty() {
                any_overdue = true;
                member.send_overdue_notice(&match overdue.len() {
                    1 => "You have 1 overdue book.".to_string(),
                    k => format!("You have {k} overdue books."),
                });
            }

            if report.ends_with("None") {
                report.push('\n');
            }
            report.push_str(&overdue_report(member, &overdue));
        }

        if !any_overdue {
            return Ok("No books are overdue.".to_string());
        }
        Ok(report)
    }

    /// Case-insensitive search over titles and authors of the whole catalog,
    /// including books currently on loan.
    ///
    /// Never fails: a short query yields an explanatory message instead.
    pub fn search(&self, text: &str) -> String {
        if validate_search_query(text).is_err() {
            return "Search string must contain at least four characters.".to_string();
        }

        let needle = text.to_lowercase();
        let found: Vec<String> = self
            .catalog
            .values()
            .filter(|book| book.matches(&needle))
            .map(ToString::to_string)
            .collect();

        if found.is_empty() {
            "No books found.".to_string()
        } else {
            found.join("\n")
        }
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn ensure_open(&self) -> CoreResult<()> {
        if self.is_open {
            Ok(())
        } else {
            Err(CirculationError::NotOpen)
        }
    }

    fn served_index(&self) -> CoreResult<usize> {
        self.ensure_open()?;
        self.current_member.ok_or(CirculationError::NoCurrentMember)
    }

    fn overdue_books(&self, member: &Member) -> Vec<&Book> {
        let today = self.today();
        member
            .books()
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .filter(|book| book.is_overdue(today))
            .collect()
    }
}

fn overdue_report(member: &Member, overdue: &[&Book]) -> String {
    let mut report = format!("Overdue books for {}:\n", member.name());
    if overdue.is_empty() {
        report.push_str("None");
    }
    for book in overdue {
        report.push_str(&book.to_string());
        report.push('\n');
    }
    report
}

// =============================================================================
// Unit Tests
// =============================================================================
