use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::LibraryError;

/// Caller-assigned identifier of a library patron
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct UserId(String);

impl UserId {
    /// Create a new user identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Patron category; each role fixes a borrow quota
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Role {
    /// May hold up to three books
    Student,
    /// May hold up to five books
    Teacher,
    /// May hold a single book
    Guest,
}

impl Role {
    /// All roles in menu order
    pub const ALL: [Self; 3] = [Self::Student, Self::Teacher, Self::Guest];

    /// Number of books a patron with this role may hold at once
    #[must_use]
    pub const fn quota(self) -> u32 {
        match self {
            Self::Student => 3,
            Self::Teacher => 5,
            Self::Guest => 1,
        }
    }

    /// Whether a patron of this role holding `currently_borrowed` books may take another
    #[must_use]
    pub const fn can_borrow(self, currently_borrowed: u32) -> bool {
        currently_borrowed < self.quota()
    }

    /// Display label used in listings
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Teacher => "Teacher",
            Self::Guest => "Guest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Parses the menu selector (`1`-`3`) or the role name, case-insensitively
impl FromStr for Role {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "student" => Ok(Self::Student),
            "2" | "teacher" => Ok(Self::Teacher),
            "3" | "guest" => Ok(Self::Guest),
            _ => Err(LibraryError::InvalidInput("Invalid user type.".to_string())),
        }
    }
}

/// A registered library patron
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    /// Display name
    name: String,
    /// Identifier, immutable after registration
    id: UserId,
    /// Role, which determines the borrow limit
    role: Role,
    /// Number of books currently held
    currently_borrowed: u32,
}

impl User {
    /// Create a patron holding no books
    #[must_use]
    pub fn new(role: Role, name: impl Into<String>, id: impl Into<UserId>) -> Self {
        Self { name: name.into(), id: id.into(), role, currently_borrowed: 0 }
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Role
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Borrow limit derived from the role
    #[must_use]
    pub fn max_borrow_limit(&self) -> u32 {
        self.role.quota()
    }

    /// Number of books currently held
    #[must_use]
    pub fn currently_borrowed(&self) -> u32 {
        self.currently_borrowed
    }

    /// Whether this patron may take another book right now
    #[must_use]
    pub fn can_borrow(&self) -> bool {
        self.role.can_borrow(self.currently_borrowed)
    }

    /// Record one more book held
    pub fn increment_borrowed(&mut self) {
        self.currently_borrowed = self.currently_borrowed.saturating_add(1);
    }

    /// Record one book given back; stays at zero when nothing is held
    pub fn decrement_borrowed(&mut self) {
        self.currently_borrowed = self.currently_borrowed.saturating_sub(1);
    }
}
