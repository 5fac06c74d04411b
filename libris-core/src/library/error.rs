//! Circulation error types with operator-facing messages

use thiserror::Error;

/// Errors raised by catalog and circulation operations.
///
/// Every variant is local to a single operation: the shell prints the
/// message and the menu loop continues. None of these are fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// The book is already checked out to someone
    #[error("Book is already borrowed.")]
    AlreadyBorrowed { id: String },

    /// The book is on the shelf; there is nothing to return
    #[error("Book was not borrowed.")]
    NotBorrowed { id: String },

    /// The book is not in this user's held set
    #[error("You haven't borrowed this book.")]
    NotHeldByUser { username: String, id: String },

    /// No user registered under this name
    #[error("User not found.")]
    UserNotFound { username: String },

    /// No book in the catalog under this id
    #[error("Book not found.")]
    BookNotFound { id: String },

    /// The username is already taken
    #[error("User already exists.")]
    DuplicateUser { username: String },
}

// LibraryError implements Error via thiserror, so it automatically works
// with anyhow at the CLI boundary.
