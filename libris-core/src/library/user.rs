//! Registered patrons and their held sets
//!
//! The held set is keyed by book id, not by reference: the canonical
//! Book lives in the library catalog, and a user only records which
//! ids it currently holds.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::{Book, LibraryError};

/// A registered patron
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Registry key, unique within a [`Library`](super::Library)
    pub username: String,

    /// Ids of books currently held and not yet returned
    pub borrowed: BTreeSet<String>,
}

impl User {
    /// Register a new patron with an empty held set
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            borrowed: BTreeSet::new(),
        }
    }

    /// Borrow a book: check it out, then record the id in the held set
    ///
    /// Propagates [`LibraryError::AlreadyBorrowed`] from the book with no
    /// held-set mutation. The book's own gate means a double-add cannot
    /// occur.
    pub fn borrow(&mut self, book: &mut Book) -> Result<(), LibraryError> {
        book.check_out()?;
        self.borrowed.insert(book.id.clone());
        Ok(())
    }

    /// Return a book: membership is checked before the book is touched
    ///
    /// Fails with [`LibraryError::NotHeldByUser`] if this user does not
    /// hold the book, leaving the book's state unchanged. The
    /// [`Book::check_in`] call cannot fail under correct library
    /// mediation, but its error is propagated rather than swallowed.
    pub fn give_back(&mut self, book: &mut Book) -> Result<(), LibraryError> {
        if !self.borrowed.contains(&book.id) {
            return Err(LibraryError::NotHeldByUser {
                username: self.username.clone(),
                id: book.id.clone(),
            });
        }
        book.check_in()?;
        self.borrowed.remove(&book.id);
        Ok(())
    }

    /// Number of books currently held
    pub fn held_count(&self) -> usize {
        self.borrowed.len()
    }

    /// Whether this user currently holds the given book id
    pub fn holds(&self, book_id: &str) -> bool {
        self.borrowed.contains(book_id)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User: {} | Borrowed Books: {}",
            self.username,
            self.borrowed.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrow_records_the_book_id() {
        let mut user = User::new("alice");
        let mut book = Book::new("B1", "Dune", "Herbert");

        user.borrow(&mut book).unwrap();

        assert!(!book.available);
        assert!(user.holds("B1"));
        assert_eq!(user.held_count(), 1);
    }

    #[test]
    fn failed_borrow_leaves_held_set_untouched() {
        let mut alice = User::new("alice");
        let mut bob = User::new("bob");
        let mut book = Book::new("B1", "Dune", "Herbert");

        alice.borrow(&mut book).unwrap();
        let err = bob.borrow(&mut book).unwrap_err();

        assert_eq!(
            err,
            LibraryError::AlreadyBorrowed {
                id: "B1".to_string()
            }
        );
        assert!(!bob.holds("B1"));
        assert!(alice.holds("B1"));
    }

    #[test]
    fn give_back_requires_membership_and_leaves_book_untouched_on_failure() {
        let mut alice = User::new("alice");
        let mut bob = User::new("bob");
        let mut book = Book::new("B1", "Dune", "Herbert");

        alice.borrow(&mut book).unwrap();

        // bob never borrowed it; the book must stay checked out
        let err = bob.give_back(&mut book).unwrap_err();
        assert_eq!(
            err,
            LibraryError::NotHeldByUser {
                username: "bob".to_string(),
                id: "B1".to_string()
            }
        );
        assert!(!book.available);
    }

    #[test]
    fn borrow_then_give_back_round_trips() {
        let mut user = User::new("alice");
        let mut book = Book::new("B1", "Dune", "Herbert");

        user.borrow(&mut book).unwrap();
        user.give_back(&mut book).unwrap();

        assert!(book.available);
        assert_eq!(user.held_count(), 0);
    }

    #[test]
    fn display_reports_held_count() {
        let mut user = User::new("alice");
        let mut book = Book::new("B1", "Dune", "Herbert");
        assert_eq!(user.to_string(), "User: alice | Borrowed Books: 0");

        user.borrow(&mut book).unwrap();
        assert_eq!(user.to_string(), "User: alice | Borrowed Books: 1");
    }
}
