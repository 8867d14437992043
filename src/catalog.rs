use std::{collections::VecDeque, fmt};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    book::{Book, BookId},
    book_state::BookState,
    config::LibraryConfig,
    directory::UserDirectory,
    error::{LibraryError, Result},
    events::BookEvent,
    observers::TransactionObserver,
    outcome::{
        BorrowOutcome, HandOff, PatronRef, ReserveOutcome, ReturnOutcome, SkipReason,
        SkippedReservation,
    },
    user::{User, UserId},
};

/// A custody transaction applied to a book
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransactionRecord {
    /// Monotonic position in the transaction log
    pub sequence: u64,
    /// Book the transaction applied to
    pub book: BookId,
    /// Title of the book at the time
    pub title: String,
    /// The state before the transaction
    pub from: BookState,
    /// The state after the transaction
    pub to: BookState,
    /// The event that caused the transaction
    pub event: BookEvent,
}

/// Owns the catalog and applies borrow, return and reservation transactions
pub struct CatalogTransactionManager {
    /// Catalogued books in insertion order
    books: Vec<Book>,
    /// Reservation capacity given to newly added books
    reservation_capacity: Option<usize>,
    /// Record of applied transactions, oldest first
    history: VecDeque<TransactionRecord>,
    /// Maximum number of history entries to keep
    max_history_size: usize,
    /// Sequence number of the next transaction
    next_sequence: u64,
    /// Registered transaction observers
    observers: Vec<Box<dyn TransactionObserver>>,
}

impl fmt::Debug for CatalogTransactionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogTransactionManager")
            .field("books", &self.books)
            .field("reservation_capacity", &self.reservation_capacity)
            .field("history", &self.history)
            .field("max_history_size", &self.max_history_size)
            .field("next_sequence", &self.next_sequence)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Default for CatalogTransactionManager {
    fn default() -> Self {
        Self::new(&LibraryConfig::default())
    }
}

impl CatalogTransactionManager {
    /// Create an empty catalog
    #[must_use]
    pub fn new(config: &LibraryConfig) -> Self {
        Self {
            books: Vec::new(),
            reservation_capacity: config.reservation_capacity,
            history: VecDeque::new(),
            max_history_size: config.history_limit,
            next_sequence: 0,
            observers: Vec::new(),
        }
    }

    /// Register an observer to be notified of applied transactions
    pub fn register_observer(&mut self, observer: Box<dyn TransactionObserver>) {
        self.observers.push(observer);
    }

    /// Catalogue a new, available book
    pub fn add_book(&mut self, title: impl Into<String>, author: impl Into<String>) -> BookId {
        let id = BookId::new(self.books.len());
        let book = Book::new(title, author, self.reservation_capacity);
        debug!(book = %id, title = book.title(), "adding book");
        self.books.push(book);
        id
    }

    /// Look up a book by id
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if no book has this id
    pub fn book(&self, id: BookId) -> Result<&Book> {
        self.books.get(id.index()).ok_or_else(|| Self::missing_book(id))
    }

    /// All books in catalog order
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// First book, in catalog order, whose title contains `query` ignoring case
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if no title matches
    pub fn search_by_title(&self, query: &str) -> Result<BookId> {
        self.books
            .iter()
            .position(|book| book.title_matches(query))
            .map(BookId::new)
            .ok_or_else(|| LibraryError::NotFound(format!("Book titled '{query}' not found.")))
    }

    /// Lend an available book to an eligible patron
    ///
    /// A book held by anyone is refused before the patron's quota is looked
    /// at. Refusals leave both the book and the patron untouched.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if no book has this id
    pub fn borrow(&mut self, user: &mut User, book_id: BookId) -> Result<BorrowOutcome> {
        let book = self.book_mut(book_id)?;
        if !book.is_available() {
            info!(book = %book_id, user_id = %user.id(), "borrow refused: book is out");
            return Ok(BorrowOutcome::CurrentlyBorrowed);
        }
        if !user.can_borrow() {
            info!(
                book = %book_id,
                user_id = %user.id(),
                limit = user.max_borrow_limit(),
                "borrow refused: limit reached"
            );
            return Ok(BorrowOutcome::LimitReached);
        }

        let from = book.lend_to(user.id().clone());
        let to = book.state().clone();
        user.increment_borrowed();
        self.record(book_id, from, to, BookEvent::Borrow(user.id().clone()));
        Ok(BorrowOutcome::Borrowed)
    }

    /// Take a book back from its holder and pass it to the next eligible reservation
    ///
    /// Only the recorded holder may return a book. Once it is back, the
    /// reservation queue is drained from the head: identifiers that no longer
    /// resolve and patrons at their limit are dropped, and the first eligible
    /// patron receives the book. At most one reservation is served per return.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if no book has this id or the
    /// returning patron is not registered
    pub fn return_book(
        &mut self,
        book_id: BookId,
        returning: &UserId,
        users: &mut UserDirectory,
    ) -> Result<ReturnOutcome> {
        let returned_by = users
            .find_by_id(returning)
            .map(PatronRef::of)
            .ok_or_else(|| Self::missing_user(returning))?;

        let book = self.book_mut(book_id)?;
        match book.borrower_id() {
            None => {
                info!(book = %book_id, user_id = %returning, "return refused: not borrowed");
                return Ok(ReturnOutcome::NotBorrowed);
            }
            Some(holder) if holder != returning => {
                info!(
                    book = %book_id,
                    user_id = %returning,
                    holder = %holder,
                    "return refused: wrong borrower"
                );
                return Ok(ReturnOutcome::WrongBorrower);
            }
            Some(_) => {}
        }

        let from = book.shelve();
        if let Some(user) = users.find_by_id_mut(returning) {
            user.decrement_borrowed();
        }
        self.record(book_id, from, BookState::Available, BookEvent::Return(returning.clone()));

        let hand_off = self.hand_off(book_id, users)?;
        Ok(ReturnOutcome::Returned { returned_by, hand_off })
    }

    /// Serve the reservation queue of a book that has just come back
    fn hand_off(&mut self, book_id: BookId, users: &mut UserDirectory) -> Result<HandOff> {
        let mut hand_off = HandOff::default();

        loop {
            let Some(candidate_id) = self.book_mut(book_id)?.reservations_mut().pop() else {
                break;
            };
            let Some(candidate) = users.find_by_id_mut(&candidate_id) else {
                warn!(book = %book_id, user_id = %candidate_id, "reserved user not found, dropping");
                hand_off.skipped.push(SkippedReservation {
                    user_id: candidate_id,
                    name: None,
                    reason: SkipReason::UnknownUser,
                });
                continue;
            };
            if !candidate.can_borrow() {
                warn!(
                    book = %book_id,
                    user_id = %candidate_id,
                    "reserved user has reached borrow limit, dropping"
                );
                hand_off.skipped.push(SkippedReservation {
                    user_id: candidate_id,
                    name: Some(candidate.name().to_string()),
                    reason: SkipReason::LimitReached,
                });
                continue;
            }

            candidate.increment_borrowed();
            let patron = PatronRef::of(candidate);
            let book = self.book_mut(book_id)?;
            let from = book.lend_to(candidate_id.clone());
            let to = book.state().clone();
            info!(book = %book_id, user_id = %candidate_id, "handed off to next reservation");
            self.record(book_id, from, to, BookEvent::HandOff(candidate_id));
            hand_off.assigned_to = Some(patron);
            break;
        }

        Ok(hand_off)
    }

    /// Queue a patron for a book
    ///
    /// The identifier is not checked against the directory and the book may
    /// be on the shelf. When the queue is full the reservation is dropped.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if no book has this id
    pub fn reserve(&mut self, book_id: BookId, user_id: UserId) -> Result<ReserveOutcome> {
        let book = self.book_mut(book_id)?;
        let state = book.state().clone();
        let Some(position) = book.reservations_mut().push(user_id.clone()) else {
            warn!(book = %book_id, user_id = %user_id, "reservation queue full, dropping");
            return Ok(ReserveOutcome::QueueFull);
        };

        debug!(book = %book_id, user_id = %user_id, position, "reservation queued");
        self.record(book_id, state.clone(), state, BookEvent::Reserve(user_id));
        Ok(ReserveOutcome::Queued(position))
    }

    /// Get the retained transaction history, oldest first
    #[must_use]
    pub fn history(&self) -> &VecDeque<TransactionRecord> {
        &self.history
    }

    /// Mutable access to a book by id
    fn book_mut(&mut self, id: BookId) -> Result<&mut Book> {
        self.books.get_mut(id.index()).ok_or_else(|| Self::missing_book(id))
    }

    /// Append a transaction to the history and notify observers
    fn record(&mut self, book: BookId, from: BookState, to: BookState, event: BookEvent) {
        let title =
            self.books.get(book.index()).map(|b| b.title().to_string()).unwrap_or_default();
        let record =
            TransactionRecord { sequence: self.next_sequence, book, title, from, to, event };
        self.next_sequence = self.next_sequence.saturating_add(1);

        for observer in &self.observers {
            observer.on_transaction(&record);
        }

        self.history.push_back(record);
        while self.history.len() > self.max_history_size {
            self.history.pop_front();
        }
    }

    /// Error for an id that is not in the catalog
    fn missing_book(id: BookId) -> LibraryError {
        LibraryError::NotFound(format!("Book {id} not found."))
    }

    /// Error for a patron that is not in the directory
    fn missing_user(id: &UserId) -> LibraryError {
        LibraryError::NotFound(format!("User ID {id} not found."))
    }
}
