use std::collections::VecDeque;

use crate::{book::Book, book_state::BookState, catalog::TransactionRecord, user::User};

/// Plain-text tables for patrons, books and transactions
#[derive(Debug)]
pub struct CatalogReport;

impl CatalogReport {
    /// Table of patrons: name, id, books held and role
    #[must_use]
    pub fn users_table(users: &[User]) -> String {
        let mut out = format!("{:-^88}\n", " USER LIST ");
        out.push_str(&format!(
            "{:<50} {:<10} {:<10} {:<12}\n",
            "Name", "ID", "Borrowed", "User Type"
        ));
        out.push_str(&format!("{}\n", "-".repeat(88)));
        for user in users {
            out.push_str(&format!(
                "{:<50} {:<10} {:<10} {:<12}\n",
                user.name(),
                user.id(),
                user.currently_borrowed(),
                user.role()
            ));
        }
        out
    }

    /// Table of books: title, availability, holder and queued reservations
    #[must_use]
    pub fn books_table(books: &[Book]) -> String {
        let mut out = format!("{:-^120}\n", " BOOK LIST ");
        out.push_str(&format!(
            "{:<70} {:<12} {:<12} {:<12}\n",
            "Title", "Available", "Borrower", "Reservations"
        ));
        out.push_str(&format!("{}\n", "-".repeat(120)));
        for book in books {
            let borrower = book.borrower_id().map_or("None", |id| id.as_str());
            out.push_str(&format!(
                "{:<70} {:<12} {:<12} {:<12}\n",
                book.title(),
                book.is_available(),
                borrower,
                Self::queue_label(book)
            ));
        }
        out
    }

    /// Details shown when a search finds a book
    #[must_use]
    pub fn book_details(book: &Book) -> String {
        format!(
            "Title: {}\nAuthor: {}\nAvailable: {}\nStatus: {}",
            book.title(),
            book.author(),
            book.is_available(),
            book.state().get_description()
        )
    }

    /// One line per transaction, oldest first
    #[must_use]
    pub fn history_table(records: &VecDeque<TransactionRecord>) -> String {
        let mut out = String::from("Transaction History:\n");
        for record in records {
            out.push_str(&format!(
                "{}. {} --({})--> {}  [{}]\n",
                record.sequence,
                Self::state_label(&record.from),
                record.event,
                Self::state_label(&record.to),
                record.title
            ));
        }
        out
    }

    /// Queued reservations, against the capacity when there is one
    fn queue_label(book: &Book) -> String {
        let queued = book.reservations().len();
        match book.reservations().capacity() {
            Some(capacity) => format!("{queued}/{capacity}"),
            None => queued.to_string(),
        }
    }

    /// Short label for a custody state
    fn state_label(state: &BookState) -> String {
        match state {
            BookState::Available => "Available".to_string(),
            BookState::Borrowed(id) => format!("Borrowed({id})"),
        }
    }
}
