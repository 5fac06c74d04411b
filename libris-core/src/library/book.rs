//! Catalog entries and their availability state
//!
//! A book is a two-state machine: Available ⇄ Borrowed, gated by
//! [`Book::check_out`] and [`Book::check_in`]. The initial state is
//! always Available.

use std::fmt;

use serde::Serialize;

use super::LibraryError;

/// A catalog entry
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    /// Catalog key, unique within a [`Library`](super::Library)
    pub id: String,

    /// Title as entered by the operator
    pub title: String,

    /// Author as entered by the operator
    pub author: String,

    /// Availability flag: false iff exactly one user holds this book
    pub available: bool,
}

impl Book {
    /// Create a new book, available for borrowing
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            available: true,
        }
    }

    /// Mark the book as checked out
    ///
    /// Fails with [`LibraryError::AlreadyBorrowed`] (no state change) when
    /// the book is already out.
    pub fn check_out(&mut self) -> Result<(), LibraryError> {
        if !self.available {
            return Err(LibraryError::AlreadyBorrowed {
                id: self.id.clone(),
            });
        }
        self.available = false;
        tracing::debug!(id = %self.id, "book checked out");
        Ok(())
    }

    /// Mark the book as back on the shelf
    ///
    /// Fails with [`LibraryError::NotBorrowed`] (no state change) when the
    /// book was never checked out.
    pub fn check_in(&mut self) -> Result<(), LibraryError> {
        if self.available {
            return Err(LibraryError::NotBorrowed {
                id: self.id.clone(),
            });
        }
        self.available = true;
        tracing::debug!(id = %self.id, "book checked in");
        Ok(())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.available {
            "Available"
        } else {
            "Not Available"
        };
        write!(
            f,
            "{}: {} by {} | {}",
            self.id, self.title, self.author, status
        )
    }
}
