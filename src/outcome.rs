//! Results of custody transactions.
//!
//! A rejected borrow or return is a normal answer, not an error: the
//! transaction simply did not happen and nothing changed. Callers match on
//! these values before assuming any state moved.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::user::{User, UserId};

/// Result of a borrow request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum BorrowOutcome {
    /// The patron now holds the book
    Borrowed,
    /// Someone else holds the book
    CurrentlyBorrowed,
    /// The patron already holds as many books as their role allows
    LimitReached,
}

impl BorrowOutcome {
    /// Whether any state changed
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Borrowed)
    }
}

impl fmt::Display for BorrowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Borrowed => f.write_str("Borrow successful!"),
            Self::CurrentlyBorrowed => f.write_str("Book is currently borrowed."),
            Self::LimitReached => f.write_str("Borrow limit reached!"),
        }
    }
}

/// Why a queued reservation was discarded during hand-off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum SkipReason {
    /// No patron is registered under the queued identifier
    UnknownUser,
    /// The patron is at their borrow limit
    LimitReached,
}

/// Name and identifier of a patron involved in a transaction
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PatronRef {
    /// Identifier the patron was registered under
    pub id: UserId,
    /// Display name at the time of the transaction
    pub name: String,
}

impl PatronRef {
    /// Capture a registered patron
    #[must_use]
    pub fn of(user: &User) -> Self {
        Self { id: user.id().clone(), name: user.name().to_string() }
    }
}

impl fmt::Display for PatronRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// A reservation popped and dropped while looking for the next holder
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SkippedReservation {
    /// Queued identifier
    pub user_id: UserId,
    /// Name of the patron, when the identifier still resolves
    pub name: Option<String>,
    /// Why it was not served
    pub reason: SkipReason,
}

/// What happened to the reservation queue when a book came back
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HandOff {
    /// Patron who received the book, if any
    pub assigned_to: Option<PatronRef>,
    /// Entries discarded before a holder was found, in queue order
    pub skipped: Vec<SkippedReservation>,
}

/// Result of a return request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum ReturnOutcome {
    /// The book was returned and the reservation queue processed
    Returned {
        /// Patron who returned the book
        returned_by: PatronRef,
        /// Reservation processing that followed
        hand_off: HandOff,
    },
    /// The book was on the shelf
    NotBorrowed,
    /// The book is held by someone other than the returning patron
    WrongBorrower,
}

impl ReturnOutcome {
    /// Whether any state changed
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Returned { .. })
    }
}

impl fmt::Display for ReturnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Returned { returned_by, hand_off } => {
                write!(f, "Book returned successfully by user: {returned_by}")?;
                for skipped in &hand_off.skipped {
                    match skipped.reason {
                        SkipReason::LimitReached => {
                            let name = skipped.name.as_deref().unwrap_or(skipped.user_id.as_str());
                            write!(f, "\nNext user {name} has reached borrow limit. Skipping...")?;
                        }
                        SkipReason::UnknownUser => {
                            write!(f, "\nReserved user {} not found. Skipping...", skipped.user_id)?;
                        }
                    }
                }
                if let Some(next) = &hand_off.assigned_to {
                    write!(f, "\nBook automatically assigned to next user in line: {next}")?;
                }
                Ok(())
            }
            Self::NotBorrowed => f.write_str("This book is not currently borrowed!"),
            Self::WrongBorrower => f.write_str("This user did not borrow this book. Return denied!"),
        }
    }
}

/// Result of a reservation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ReserveOutcome {
    /// The patron joined the queue at this 1-based position
    Queued(usize),
    /// The queue is at capacity and the reservation was dropped
    QueueFull,
}

impl fmt::Display for ReserveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queued(_) => f.write_str("Reservation added!"),
            Self::QueueFull => f.write_str("Reservation queue is full. Reservation not added."),
        }
    }
}
