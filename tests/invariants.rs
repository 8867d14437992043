//! Property-based tests for custody invariants using proptest.
//!
//! Random sequences of borrow, return and reserve requests are applied to a
//! small library, and the availability and quota invariants are checked
//! after every step.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use booktrack::{
    BookId, BorrowOutcome, CatalogTransactionManager, LibraryConfig, ReturnOutcome, Role, User,
    UserDirectory, UserId,
};
use proptest::prelude::*;

/// Books in the test catalog
const BOOKS: usize = 4;
/// Identifiers used in requests; the last is never registered
const USER_IDS: [&str; 4] = ["s1", "t1", "g1", "ghost"];

/// Fast config for custody invariants.
fn custody_config() -> ProptestConfig {
    ProptestConfig { cases: 128, max_shrink_iters: 256, ..ProptestConfig::default() }
}

/// A request against the catalog
#[derive(Debug, Clone)]
enum Op {
    /// Borrow request
    Borrow {
        /// Index into `USER_IDS`
        user: usize,
        /// Index into the catalog
        book: usize,
    },
    /// Return request
    Return {
        /// Index into `USER_IDS`
        user: usize,
        /// Index into the catalog
        book: usize,
    },
    /// Reservation request
    Reserve {
        /// Index into `USER_IDS`
        user: usize,
        /// Index into the catalog
        book: usize,
    },
}

/// Any request from any known or unknown identifier against any book
fn op_strategy() -> impl Strategy<Value = Op> {
    let user = 0..USER_IDS.len();
    let book = 0..BOOKS;
    prop_oneof![
        (user.clone(), book.clone()).prop_map(|(user, book)| Op::Borrow { user, book }),
        (user.clone(), book.clone()).prop_map(|(user, book)| Op::Return { user, book }),
        (user, book).prop_map(|(user, book)| Op::Reserve { user, book }),
    ]
}

/// Helper function to set up four books and three patrons, with room for three reservations per book
fn setup() -> (CatalogTransactionManager, UserDirectory) {
    let config = LibraryConfig { reservation_capacity: Some(3), ..LibraryConfig::default() };
    let mut catalog = CatalogTransactionManager::new(&config);
    for n in 0..BOOKS {
        catalog.add_book(format!("Book {n}"), "Author");
    }
    let mut users = UserDirectory::new();
    users.register(User::new(Role::Student, "Sam", "s1"));
    users.register(User::new(Role::Teacher, "Tess", "t1"));
    users.register(User::new(Role::Guest, "Gil", "g1"));
    (catalog, users)
}

/// Snapshot of everything a refused request must leave untouched
fn snapshot(
    catalog: &CatalogTransactionManager,
    users: &UserDirectory,
) -> (Vec<booktrack::Book>, Vec<User>) {
    (catalog.books().to_vec(), users.list_all().to_vec())
}

/// Assert availability, queue capacity and quota invariants across the whole library
fn check_invariants(catalog: &CatalogTransactionManager, users: &UserDirectory) {
    for book in catalog.books() {
        assert_eq!(book.is_available(), book.borrower_id().is_none());
        assert!(book.reservations().len() <= 3);
    }
    for user in users.list_all() {
        assert!(user.currently_borrowed() <= user.max_borrow_limit());
        let held = catalog.books().iter().filter(|b| b.borrower_id() == Some(user.id())).count();
        assert_eq!(usize::try_from(user.currently_borrowed()).unwrap(), held);
    }
}

proptest! {
    #![proptest_config(custody_config())]

    #[test]
    fn prop_invariants_hold_after_every_operation(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let (mut catalog, mut users) = setup();

        for op in ops {
            let before = snapshot(&catalog, &users);
            match op {
                Op::Borrow { user, book } => {
                    let id = UserId::new(USER_IDS[user]);
                    if let Some(user) = users.find_by_id_mut(&id) {
                        let outcome = catalog.borrow(user, BookId::new(book)).unwrap();
                        if !outcome.is_success() {
                            prop_assert_eq!(&before, &snapshot(&catalog, &users));
                        }
                        if outcome == BorrowOutcome::CurrentlyBorrowed {
                            prop_assert!(!before.0[book].is_available());
                        }
                    }
                }
                Op::Return { user, book } => {
                    let id = UserId::new(USER_IDS[user]);
                    match catalog.return_book(BookId::new(book), &id, &mut users) {
                        Ok(ReturnOutcome::Returned { hand_off, .. }) => {
                            let holder = catalog.books()[book].borrower_id().cloned();
                            prop_assert_eq!(holder, hand_off.assigned_to.map(|p| p.id));
                        }
                        Ok(_) | Err(_) => {
                            prop_assert_eq!(&before, &snapshot(&catalog, &users));
                        }
                    }
                }
                Op::Reserve { user, book } => {
                    let id = UserId::new(USER_IDS[user]);
                    catalog.reserve(BookId::new(book), id).unwrap();
                }
            }
            check_invariants(&catalog, &users);
        }
    }

    #[test]
    fn prop_borrow_return_round_trip(book in 0..BOOKS, user in 0..3_usize) {
        let (mut catalog, mut users) = setup();
        let id = UserId::new(USER_IDS[user]);
        let before = snapshot(&catalog, &users);

        let borrower = users.find_by_id_mut(&id).unwrap();
        prop_assert_eq!(catalog.borrow(borrower, BookId::new(book)).unwrap(), BorrowOutcome::Borrowed);
        let outcome = catalog.return_book(BookId::new(book), &id, &mut users).unwrap();

        prop_assert!(outcome.is_success());
        prop_assert_eq!(before, snapshot(&catalog, &users));
    }
}
