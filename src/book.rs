use std::{collections::VecDeque, fmt};

use serde::{Deserialize, Serialize};

use crate::{book_state::BookState, user::UserId};

/// Position of a book in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct BookId(usize);

impl BookId {
    /// Wrap a catalog position
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Catalog position
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// First-come first-served queue of patrons waiting for a book
///
/// Entries are identifiers only; they are resolved against the user
/// directory when the book comes back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReservationQueue {
    /// Waiting patrons, head first
    entries: VecDeque<UserId>,
    /// Maximum number of waiting entries, `None` for no limit
    capacity: Option<usize>,
}

impl ReservationQueue {
    /// Create an empty queue holding at most `capacity` entries
    #[must_use]
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self { entries: VecDeque::new(), capacity }
    }

    /// Append a patron; returns their 1-based position, or `None` if the queue is full
    pub fn push(&mut self, user_id: UserId) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        self.entries.push_back(user_id);
        Some(self.entries.len())
    }

    /// Remove and return the head of the queue
    pub fn pop(&mut self) -> Option<UserId> {
        self.entries.pop_front()
    }

    /// Whether another reservation would be dropped
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.entries.len() >= cap)
    }

    /// Number of waiting patrons
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nobody is waiting
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured capacity
    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Waiting patrons in service order
    pub fn iter(&self) -> impl Iterator<Item = &UserId> {
        self.entries.iter()
    }
}

/// A catalogued title; the catalog holds one copy per title
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Book {
    /// Title
    title: String,
    /// Author
    author: String,
    /// Custody state
    state: BookState,
    /// Patrons waiting for this book
    reservations: ReservationQueue,
}

impl Book {
    /// Create an available book with an empty reservation queue
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        reservation_capacity: Option<usize>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            state: BookState::Available,
            reservations: ReservationQueue::with_capacity(reservation_capacity),
        }
    }

    /// Title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Custody state
    #[must_use]
    pub fn state(&self) -> &BookState {
        &self.state
    }

    /// Whether the book is on the shelf
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.state.is_available()
    }

    /// Identifier of the current holder
    #[must_use]
    pub fn borrower_id(&self) -> Option<&UserId> {
        self.state.borrower_id()
    }

    /// Reservation queue
    #[must_use]
    pub fn reservations(&self) -> &ReservationQueue {
        &self.reservations
    }

    /// Case-insensitive substring match against the title
    #[must_use]
    pub fn title_matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }

    /// Hand the book to `user_id`, returning the previous state
    pub(crate) fn lend_to(&mut self, user_id: UserId) -> BookState {
        std::mem::replace(&mut self.state, BookState::Borrowed(user_id))
    }

    /// Put the book back on the shelf, returning the previous state
    pub(crate) fn shelve(&mut self) -> BookState {
        std::mem::take(&mut self.state)
    }

    /// Mutable access to the reservation queue
    pub(crate) fn reservations_mut(&mut self) -> &mut ReservationQueue {
        &mut self.reservations
    }
}
