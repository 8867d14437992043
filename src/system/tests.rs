#![allow(clippy::unwrap_used, clippy::panic)]

use std::{cell::RefCell, rc::Rc};

use crate::{
    catalog::TransactionRecord,
    config::LibraryConfig,
    error::LibraryError,
    events::BookEvent,
    observers::TransactionObserver,
    outcome::{BorrowOutcome, ReserveOutcome, ReturnOutcome},
    system::LibrarySystem,
    user::{Role, UserId},
};

/// Helper function to set up a small library without the default catalog
fn setup_test_system() -> LibrarySystem {
    let config = LibraryConfig { seed_catalog: false, ..LibraryConfig::default() };
    let mut system = LibrarySystem::new(&config);

    system.add_book("Harry Potter and the Sorcerer's Stone", "J.K. Rowling");
    system.add_book("The Hobbit", "J.R.R. Tolkien");
    system.register_user(Role::Student, "Sam", "s1");
    system.register_user(Role::Guest, "Gil", "g1");

    system
}

#[test]
fn test_initial_state() {
    let system = setup_test_system();
    assert_eq!(system.list_books().len(), 2);
    assert_eq!(system.list_users().len(), 2);
    assert!(system.list_books().iter().all(|b| b.is_available()));
    assert_eq!(system.to_string(), "2 users, 2 books (0 borrowed)");
}

#[test]
fn test_default_system_is_seeded() {
    let system = LibrarySystem::default();
    assert_eq!(system.list_books().len(), crate::seed::DEFAULT_CATALOG.len());
    assert!(system.list_users().is_empty());
}

#[test]
fn test_search_book() {
    let system = setup_test_system();
    let book = system.search_book("HOBBIT").unwrap();
    assert_eq!(book.author(), "J.R.R. Tolkien");

    assert_eq!(
        system.search_book("dune").map(|b| b.title().to_string()),
        Err(LibraryError::NotFound("Book titled 'dune' not found.".to_string()))
    );
}

#[test]
fn test_valid_transitions() {
    let mut system = setup_test_system();
    let sam = UserId::new("s1");

    assert_eq!(system.borrow(&sam, "harry"), Ok(BorrowOutcome::Borrowed));
    assert_eq!(system.search_book("harry").unwrap().borrower_id(), Some(&sam));
    assert_eq!(system.to_string(), "2 users, 2 books (1 borrowed)");

    let outcome = system.return_book(&sam, "harry").unwrap();
    assert!(outcome.is_success());
    assert!(system.search_book("harry").unwrap().is_available());
    assert_eq!(system.find_user(&sam).unwrap().currently_borrowed(), 0);
}

#[test]
fn test_invalid_transition() {
    let mut system = setup_test_system();

    // Returning a book that is on the shelf is refused
    let outcome = system.return_book(&UserId::new("s1"), "hobbit");
    assert_eq!(outcome, Ok(ReturnOutcome::NotBorrowed));
    assert!(system.search_book("hobbit").unwrap().is_available());
}

#[test]
fn test_unknown_user_is_not_found() {
    let mut system = setup_test_system();
    let ghost = UserId::new("ghost");

    assert!(matches!(system.borrow(&ghost, "harry"), Err(LibraryError::NotFound(_))));
    assert!(matches!(system.return_book(&ghost, "harry"), Err(LibraryError::NotFound(_))));
    assert!(matches!(system.reserve(&ghost, "harry"), Err(LibraryError::NotFound(_))));
    assert!(system.search_book("harry").unwrap().reservations().is_empty());
}

#[test]
fn test_unknown_title_is_not_found() {
    let mut system = setup_test_system();
    assert!(matches!(system.borrow(&UserId::new("s1"), "dune"), Err(LibraryError::NotFound(_))));
}

#[test]
fn test_reservation_hand_off_through_facade() {
    let mut system = setup_test_system();
    let sam = UserId::new("s1");
    let gil = UserId::new("g1");

    system.borrow(&sam, "hobbit").unwrap();
    assert_eq!(system.reserve(&gil, "hobbit"), Ok(ReserveOutcome::Queued(1)));

    let ReturnOutcome::Returned { hand_off, .. } = system.return_book(&sam, "hobbit").unwrap()
    else {
        panic!("return should succeed");
    };
    assert_eq!(hand_off.assigned_to.map(|p| p.id), Some(gil.clone()));
    assert_eq!(system.search_book("hobbit").unwrap().borrower_id(), Some(&gil));
    assert_eq!(system.find_user(&gil).unwrap().currently_borrowed(), 1);
}

#[test]
fn test_history_tracking() {
    let mut system = setup_test_system();
    let sam = UserId::new("s1");

    system.borrow(&sam, "harry").unwrap();
    system.return_book(&sam, "harry").unwrap();

    let events: Vec<BookEvent> = system.history().map(|r| r.event.clone()).collect();
    assert_eq!(events, [BookEvent::Borrow(sam.clone()), BookEvent::Return(sam)]);
}

// Duplicate identifiers are accepted; the later patron can never be reached by id.
#[test]
fn test_duplicate_identifier_is_shadowed() {
    let mut system = setup_test_system();
    system.register_user(Role::Teacher, "Second Sam", "s1");

    let sam = UserId::new("s1");
    system.borrow(&sam, "harry").unwrap();
    system.borrow(&sam, "hobbit").unwrap();

    let counts: Vec<u32> = system.list_users().iter().map(|u| u.currently_borrowed()).collect();
    assert_eq!(counts, [2, 0, 0]);
    assert_eq!(system.find_user(&sam).unwrap().role(), Role::Student);
}

/// Observer keeping the events it is shown
#[derive(Debug, Default)]
struct EventLog(Rc<RefCell<Vec<BookEvent>>>);

impl TransactionObserver for EventLog {
    fn on_transaction(&self, record: &TransactionRecord) {
        self.0.borrow_mut().push(record.event.clone());
    }
}

#[test]
fn test_registered_observer_sees_hand_off() {
    let mut system = setup_test_system();
    let events = Rc::new(RefCell::new(Vec::new()));
    system.register_observer(Box::new(EventLog(Rc::clone(&events))));

    let sam = UserId::new("s1");
    let gil = UserId::new("g1");
    system.borrow(&sam, "hobbit").unwrap();
    system.reserve(&gil, "hobbit").unwrap();
    system.return_book(&sam, "hobbit").unwrap();

    assert_eq!(
        *events.borrow(),
        [
            BookEvent::Borrow(sam.clone()),
            BookEvent::Reserve(gil.clone()),
            BookEvent::Return(sam),
            BookEvent::HandOff(gil),
        ]
    );
}
