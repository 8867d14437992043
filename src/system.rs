use std::fmt;

use tracing::info;

use crate::{
    book::{Book, BookId},
    catalog::{CatalogTransactionManager, TransactionRecord},
    config::LibraryConfig,
    directory::UserDirectory,
    error::{LibraryError, Result},
    observers::{TransactionObserver, TransitionLogger},
    outcome::{BorrowOutcome, ReserveOutcome, ReturnOutcome},
    seed::seed_default_catalog,
    user::{Role, User, UserId},
};

/// Library front desk: patrons, catalog and the transactions between them
///
/// Operations take user identifiers and title queries, resolve them, and
/// hand the resolved entities to the [`CatalogTransactionManager`].
#[derive(Debug)]
pub struct LibrarySystem {
    /// Registered patrons
    users: UserDirectory,
    /// Catalog and custody transactions
    catalog: CatalogTransactionManager,
}

impl Default for LibrarySystem {
    fn default() -> Self {
        Self::new(&LibraryConfig::default())
    }
}

impl LibrarySystem {
    /// Create a library, seeding the default catalog if the configuration asks for it
    #[must_use]
    pub fn new(config: &LibraryConfig) -> Self {
        let mut catalog = CatalogTransactionManager::new(config);
        catalog.register_observer(Box::new(TransitionLogger));
        if config.seed_catalog {
            seed_default_catalog(&mut catalog);
            info!(books = catalog.books().len(), "seeded default catalog");
        }
        Self { users: UserDirectory::new(), catalog }
    }

    /// Register an additional transaction observer
    pub fn register_observer(&mut self, observer: Box<dyn TransactionObserver>) {
        self.catalog.register_observer(observer);
    }

    /// Register a patron under a caller-chosen identifier
    pub fn register_user(&mut self, role: Role, name: impl Into<String>, id: impl Into<UserId>) {
        self.users.register(User::new(role, name, id));
    }

    /// Catalogue a new book
    pub fn add_book(&mut self, title: impl Into<String>, author: impl Into<String>) -> BookId {
        self.catalog.add_book(title, author)
    }

    /// First book whose title contains `query`, ignoring case
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if no title matches
    pub fn search_book(&self, query: &str) -> Result<&Book> {
        let id = self.catalog.search_by_title(query)?;
        self.catalog.book(id)
    }

    /// Borrow the first book matching `query` for patron `user_id`
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if the patron or the book cannot be found
    pub fn borrow(&mut self, user_id: &UserId, query: &str) -> Result<BorrowOutcome> {
        let user = self.users.find_by_id_mut(user_id).ok_or_else(|| Self::missing_user(user_id))?;
        let book = self.catalog.search_by_title(query)?;
        self.catalog.borrow(user, book)
    }

    /// Return the first book matching `query` on behalf of patron `user_id`
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if the patron or the book cannot be found
    pub fn return_book(&mut self, user_id: &UserId, query: &str) -> Result<ReturnOutcome> {
        self.require_user(user_id)?;
        let book = self.catalog.search_by_title(query)?;
        self.catalog.return_book(book, user_id, &mut self.users)
    }

    /// Queue patron `user_id` for the first book matching `query`
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if the patron or the book cannot be found
    pub fn reserve(&mut self, user_id: &UserId, query: &str) -> Result<ReserveOutcome> {
        self.require_user(user_id)?;
        let book = self.catalog.search_by_title(query)?;
        self.catalog.reserve(book, user_id.clone())
    }

    /// Patron registered under `id`
    #[must_use]
    pub fn find_user(&self, id: &UserId) -> Option<&User> {
        self.users.find_by_id(id)
    }

    /// All patrons in registration order
    #[must_use]
    pub fn list_users(&self) -> &[User] {
        self.users.list_all()
    }

    /// All books in catalog order
    #[must_use]
    pub fn list_books(&self) -> &[Book] {
        self.catalog.books()
    }

    /// Retained transaction history, oldest first
    pub fn history(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.catalog.history().iter()
    }

    /// Fail unless a patron is registered under `id`
    fn require_user(&self, id: &UserId) -> Result<()> {
        self.users.find_by_id(id).map(|_| ()).ok_or_else(|| Self::missing_user(id))
    }

    /// Error for an unregistered patron
    fn missing_user(id: &UserId) -> LibraryError {
        LibraryError::NotFound(format!("User ID {id} not found."))
    }
}

// Implementing display for nicer output
impl fmt::Display for LibrarySystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let out = self.catalog.books().iter().filter(|b| !b.is_available()).count();
        write!(
            f,
            "{} users, {} books ({out} borrowed)",
            self.users.len(),
            self.catalog.books().len()
        )
    }
}

// Include tests module
#[cfg(test)]
mod tests;
