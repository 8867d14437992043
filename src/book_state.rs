use serde::{Deserialize, Serialize};

use crate::user::UserId;

/// Custody state of a single book
///
/// The borrower is carried inside the state, so a book can never be marked
/// unavailable without a borrower or carry a borrower while available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum BookState {
    /// Book is on the shelf
    #[default]
    Available,
    /// Book is held by the identified patron
    Borrowed(UserId),
}

impl BookState {
    /// Whether the book can be borrowed directly
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Identifier of the current holder, if any
    #[must_use]
    pub fn borrower_id(&self) -> Option<&UserId> {
        match self {
            Self::Available => None,
            Self::Borrowed(id) => Some(id),
        }
    }

    /// Get a human-readable description of the current state
    #[must_use]
    pub fn get_description(&self) -> String {
        match self {
            Self::Available => "Book is available for borrowing".to_string(),
            Self::Borrowed(patron) => format!("Book is borrowed by {patron}"),
        }
    }
}
