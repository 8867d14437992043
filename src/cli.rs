//! Numbered text menu over a [`LibrarySystem`].
//!
//! Reads one answer per line from any `BufRead` and writes prompts and
//! results to any `Write`, so the binary runs it on stdin/stdout and tests
//! run it on byte buffers.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use tracing::debug;

use crate::{
    error::{LibraryError, Result},
    outcome::ReserveOutcome,
    system::LibrarySystem,
    user::{Role, UserId},
    visualization::CatalogReport,
};

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Register a patron
    AddUser,
    /// Catalogue a book
    AddBook,
    /// Find a book by title
    SearchBook,
    /// Borrow a book
    BorrowBook,
    /// Return a book
    ReturnBook,
    /// Reserve a book
    ReserveBook,
    /// List patrons
    ViewUsers,
    /// List books
    ViewBooks,
    /// Leave the menu
    Exit,
}

impl MenuChoice {
    /// All entries; entry `n` is selected by typing `n + 1`
    pub const ALL: [Self; 9] = [
        Self::AddUser,
        Self::AddBook,
        Self::SearchBook,
        Self::BorrowBook,
        Self::ReturnBook,
        Self::ReserveBook,
        Self::ViewUsers,
        Self::ViewBooks,
        Self::Exit,
    ];

    /// Menu label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AddUser => "Add User",
            Self::AddBook => "Add Book",
            Self::SearchBook => "Search Book",
            Self::BorrowBook => "Borrow Book",
            Self::ReturnBook => "Return Book",
            Self::ReserveBook => "Reserve Book",
            Self::ViewUsers => "View Users",
            Self::ViewBooks => "View Books",
            Self::Exit => "Exit",
        }
    }

    /// Parse a menu answer; `Ok(None)` for a number that is not on the menu
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::InvalidInput` if the answer is not a number
    pub fn parse(input: &str) -> Result<Option<Self>> {
        let number: usize = input.trim().parse().map_err(|_| {
            LibraryError::InvalidInput("Invalid input. Please enter a number.".to_string())
        })?;
        Ok(number.checked_sub(1).and_then(|index| Self::ALL.get(index)).copied())
    }
}

/// Answer to a user id prompt
enum UserPrompt {
    /// A registered patron
    Known(UserId),
    /// Not registered; the refusal has been printed
    Unknown,
    /// Input ended before an answer
    EndOfInput,
}

/// Input and output of a running menu
struct Session<R, W> {
    /// Answers, one per line
    input: R,
    /// Prompts and results
    output: W,
}

/// Run the menu until the user picks Exit or the input ends
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails; library
/// errors are printed and the menu continues.
pub fn run(system: &mut LibrarySystem, input: impl BufRead, output: impl Write) -> io::Result<()> {
    let mut session = Session { input, output };
    loop {
        session.print_menu()?;
        let Some(answer) = session.prompt("\nEnter choice: ")? else {
            break;
        };
        let choice = match MenuChoice::parse(&answer) {
            Ok(Some(choice)) => choice,
            Ok(None) => {
                session.error("Invalid option!")?;
                continue;
            }
            Err(e) => {
                session.error(&e.to_string())?;
                continue;
            }
        };
        debug!(?choice, "menu selection");

        let keep_going = match choice {
            MenuChoice::AddUser => session.add_user(system)?,
            MenuChoice::AddBook => session.add_book(system)?,
            MenuChoice::SearchBook => session.search_book(system)?,
            MenuChoice::BorrowBook => session.borrow_book(system)?,
            MenuChoice::ReturnBook => session.return_book(system)?,
            MenuChoice::ReserveBook => session.reserve_book(system)?,
            MenuChoice::ViewUsers => {
                writeln!(session.output, "\n{}", CatalogReport::users_table(system.list_users()))?;
                true
            }
            MenuChoice::ViewBooks => {
                writeln!(session.output, "\n{}", CatalogReport::books_table(system.list_books()))?;
                true
            }
            MenuChoice::Exit => {
                writeln!(session.output, "{}", "Thank you for using BookTrack!!!".green().bold())?;
                false
            }
        };
        if !keep_going {
            break;
        }
    }
    session.output.flush()
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Print the numbered menu
    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=============================")?;
        writeln!(self.output, "{}", "      BOOKTRACK SYSTEM".cyan().bold())?;
        writeln!(self.output, "=============================")?;
        for (number, choice) in (1..).zip(MenuChoice::ALL) {
            writeln!(self.output, "{number}. {}", choice.label())?;
        }
        Ok(())
    }

    /// Ask for one line; `None` once the input is exhausted
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Report a completed transaction
    fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message.green())
    }

    /// Report a transaction that was refused by a library rule
    fn refused(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message.yellow())
    }

    /// Report an error
    fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message.red())
    }

    /// Register a patron
    fn add_user(&mut self, system: &mut LibrarySystem) -> io::Result<bool> {
        let Some(selector) = self.prompt("\nEnter User Type (1-Student, 2-Teacher, 3-Guest): ")?
        else {
            return Ok(false);
        };
        let Some(name) = self.prompt("Enter Name: ")? else {
            return Ok(false);
        };
        let Some(id) = self.prompt("Enter User ID: ")? else {
            return Ok(false);
        };

        match selector.parse::<Role>() {
            Ok(role) => {
                system.register_user(role, name, id);
                self.success("User added successfully!")?;
            }
            Err(e) => self.error(&e.to_string())?,
        }
        Ok(true)
    }

    /// Catalogue a book
    fn add_book(&mut self, system: &mut LibrarySystem) -> io::Result<bool> {
        let Some(title) = self.prompt("\nEnter Book Title: ")? else {
            return Ok(false);
        };
        let Some(author) = self.prompt("Enter Author: ")? else {
            return Ok(false);
        };
        system.add_book(title, author);
        self.success("Book added successfully!")?;
        Ok(true)
    }

    /// Show the first book matching a title query
    fn search_book(&mut self, system: &LibrarySystem) -> io::Result<bool> {
        let Some(query) = self.prompt("\nEnter title to search: ")? else {
            return Ok(false);
        };
        match system.search_book(&query) {
            Ok(book) => {
                self.success("Book Found!")?;
                writeln!(self.output, "{}", CatalogReport::book_details(book))?;
            }
            Err(e) => self.error(&e.to_string())?,
        }
        Ok(true)
    }

    /// Ask for a user id and check it is registered
    fn known_user(
        &mut self,
        system: &LibrarySystem,
        label: &str,
        unknown: &str,
    ) -> io::Result<UserPrompt> {
        let Some(id) = self.prompt(label)? else {
            return Ok(UserPrompt::EndOfInput);
        };
        let id = UserId::new(id);
        if system.find_user(&id).is_none() {
            self.error(unknown)?;
            return Ok(UserPrompt::Unknown);
        }
        Ok(UserPrompt::Known(id))
    }

    /// Borrow a book
    fn borrow_book(&mut self, system: &mut LibrarySystem) -> io::Result<bool> {
        let user_id = match self.known_user(
            system,
            "Enter User ID: ",
            "User ID not found. Borrowing denied.",
        )? {
            UserPrompt::Known(id) => id,
            UserPrompt::Unknown => return Ok(true),
            UserPrompt::EndOfInput => return Ok(false),
        };
        let Some(query) = self.prompt("\nEnter Book Title: ")? else {
            return Ok(false);
        };

        let title = match system.search_book(&query) {
            Ok(book) => book.title().to_string(),
            Err(e) => {
                self.error(&e.to_string())?;
                return Ok(true);
            }
        };
        writeln!(self.output, "Borrowing: {title}")?;
        match system.borrow(&user_id, &query) {
            Ok(outcome) if outcome.is_success() => self.success(&outcome.to_string())?,
            Ok(outcome) => self.refused(&outcome.to_string())?,
            Err(e) => self.error(&e.to_string())?,
        }
        Ok(true)
    }

    /// Return a book, handing it to the next eligible reservation
    fn return_book(&mut self, system: &mut LibrarySystem) -> io::Result<bool> {
        let user_id = match self.known_user(
            system,
            "\nEnter User ID returning the book: ",
            "User ID not found. Cannot return book.",
        )? {
            UserPrompt::Known(id) => id,
            UserPrompt::Unknown => return Ok(true),
            UserPrompt::EndOfInput => return Ok(false),
        };
        let Some(query) = self.prompt("Enter Book Title: ")? else {
            return Ok(false);
        };

        match system.return_book(&user_id, &query) {
            Ok(outcome) if outcome.is_success() => self.success(&outcome.to_string())?,
            Ok(outcome) => self.refused(&outcome.to_string())?,
            Err(LibraryError::NotFound(_)) => self.error("Book not found. Cannot return.")?,
            Err(e) => self.error(&e.to_string())?,
        }
        Ok(true)
    }

    /// Reserve a book for a registered user
    fn reserve_book(&mut self, system: &mut LibrarySystem) -> io::Result<bool> {
        let user_id = match self.known_user(
            system,
            "\nEnter User ID: ",
            "User ID not found. Please add the user before reserving a book.",
        )? {
            UserPrompt::Known(id) => id,
            UserPrompt::Unknown => return Ok(true),
            UserPrompt::EndOfInput => return Ok(false),
        };
        let Some(query) = self.prompt("Enter Book Title: ")? else {
            return Ok(false);
        };

        match system.reserve(&user_id, &query) {
            Ok(outcome @ ReserveOutcome::Queued(_)) => self.success(&outcome.to_string())?,
            Ok(outcome) => self.refused(&outcome.to_string())?,
            Err(LibraryError::NotFound(_)) => {
                self.error("Book not found. Cannot add reservation.")?;
            }
            Err(e) => self.error(&e.to_string())?,
        }
        Ok(true)
    }
}
