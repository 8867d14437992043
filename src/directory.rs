use tracing::debug;

use crate::user::{User, UserId};

/// Registry of library patrons in registration order
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    /// Registered patrons
    users: Vec<User>,
}

impl UserDirectory {
    /// Create an empty directory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a patron
    ///
    /// Identifiers are not checked for uniqueness. A later registration that
    /// reuses an identifier is shadowed by the earlier one in every lookup.
    pub fn register(&mut self, user: User) {
        debug!(user_id = %user.id(), role = %user.role(), "registering user");
        self.users.push(user);
    }

    /// First patron registered under `id`
    #[must_use]
    pub fn find_by_id(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    /// Mutable access to the first patron registered under `id`
    pub fn find_by_id_mut(&mut self, id: &UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.id() == id)
    }

    /// All patrons in registration order
    #[must_use]
    pub fn list_all(&self) -> &[User] {
        &self.users
    }

    /// Number of registrations
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether nobody is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
