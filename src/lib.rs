//! Library patron and book custody tracking.
//!
//! This crate registers patrons with role-based borrow limits, catalogues
//! books, and mediates borrow, return and reservation transactions. When a
//! book comes back it is handed straight to the next eligible patron in its
//! reservation queue.

pub mod book;
pub mod book_state;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod events;
pub mod observers;
pub mod outcome;
pub mod seed;
pub mod system;
pub mod user;
pub mod visualization;

pub use book::{Book, BookId, ReservationQueue};
pub use book_state::BookState;
pub use catalog::{CatalogTransactionManager, TransactionRecord};
pub use config::LibraryConfig;
pub use directory::UserDirectory;
pub use error::{LibraryError, Result};
pub use events::BookEvent;
pub use outcome::{BorrowOutcome, HandOff, PatronRef, ReserveOutcome, ReturnOutcome};
pub use system::LibrarySystem;
pub use user::{Role, User, UserId};
pub use visualization::CatalogReport;
