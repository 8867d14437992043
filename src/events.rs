use std::fmt;

use serde::{Deserialize, Serialize};

use crate::user::UserId;

/// Events recorded against a book in the transaction history
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum BookEvent {
    /// A patron borrowed the book off the shelf
    Borrow(UserId),
    /// The holder brought the book back
    Return(UserId),
    /// A returned book went straight to the next eligible reserving patron
    HandOff(UserId),
    /// A patron joined the reservation queue
    Reserve(UserId),
}

impl BookEvent {
    /// Name of the action, without the patron
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            Self::Borrow(_) => "Borrow",
            Self::Return(_) => "Return",
            Self::HandOff(_) => "HandOff",
            Self::Reserve(_) => "Reserve",
        }
    }

    /// Patron the event concerns
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        match self {
            Self::Borrow(id) | Self::Return(id) | Self::HandOff(id) | Self::Reserve(id) => id,
        }
    }
}

impl fmt::Display for BookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action(), self.user_id())
    }
}
