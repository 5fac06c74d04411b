//! Libris library - catalog, registry, and circulation
//!
//! This module owns the whole domain: the book catalog, the user
//! registry, and the borrow/return operations that move books between
//! them.
//!
//! # Overview
//!
//! ```text
//! shell (libris-cli)
//!     │
//!     ▼
//! Library ─── catalog: id → Book       (availability flag)
//!     │
//!     └────── users: username → User   (held set of book ids)
//! ```
//!
//! The [`Library`] is an explicitly constructed context object: the
//! entry point creates one and passes it to every operation. State
//! lives in process memory only and is lost on exit.
//!
//! All operations are synchronous and return before the next one
//! starts; nothing here is safe for concurrent callers.

mod book;
mod error;
mod user;

pub use book::Book;
pub use error::LibraryError;
pub use user::User;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

/// The catalog/registry orchestrator and sole mutator of domain state
#[derive(Debug, Default)]
pub struct Library {
    /// All known books, keyed by id
    catalog: HashMap<String, Book>,

    /// All registered users, keyed by username
    users: HashMap<String, User>,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book to the catalog, available for borrowing
    ///
    /// A duplicate id silently replaces the existing entry
    /// (last-write-wins); callers own id uniqueness. The overwrite is
    /// logged at WARN so an operator can spot it.
    pub fn add_book(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> &Book {
        use std::collections::hash_map::Entry;

        let id = id.into();
        let book = Book::new(id.clone(), title, author);

        match self.catalog.entry(id) {
            Entry::Occupied(mut entry) => {
                tracing::warn!(id = %entry.key(), "duplicate book id, replacing catalog entry");
                entry.insert(book);
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                tracing::debug!(id = %entry.key(), "book added to catalog");
                entry.insert(book)
            }
        }
    }

    /// Register a new user with an empty held set
    ///
    /// Fails with [`LibraryError::DuplicateUser`] and performs no
    /// mutation when the username is already taken.
    pub fn register_user(
        &mut self,
        username: impl Into<String>,
    ) -> Result<&User, LibraryError> {
        use std::collections::hash_map::Entry;

        let username = username.into();
        match self.users.entry(username) {
            Entry::Occupied(entry) => Err(LibraryError::DuplicateUser {
                username: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                tracing::debug!(username = %entry.key(), "user registered");
                let user = User::new(entry.key().clone());
                Ok(entry.insert(user))
            }
        }
    }

    /// Borrow a book on behalf of a user
    ///
    /// The user lookup runs first and short-circuits with
    /// [`LibraryError::UserNotFound`]; then the book lookup with
    /// [`LibraryError::BookNotFound`]; then [`User::borrow`]. Every
    /// failure leaves all state unchanged.
    pub fn borrow_book(&mut self, username: &str, book_id: &str) -> Result<(), LibraryError> {
        let user = self
            .users
            .get_mut(username)
            .ok_or_else(|| LibraryError::UserNotFound {
                username: username.to_string(),
            })?;
        let book = self
            .catalog
            .get_mut(book_id)
            .ok_or_else(|| LibraryError::BookNotFound {
                id: book_id.to_string(),
            })?;

        user.borrow(book)?;
        tracing::debug!(username, book_id, "borrow completed");
        Ok(())
    }

    /// Return a book on behalf of a user
    ///
    /// Mirrors [`Library::borrow_book`]: same lookup order, same
    /// failure containment, delegating to [`User::give_back`].
    pub fn return_book(&mut self, username: &str, book_id: &str) -> Result<(), LibraryError> {
        let user = self
            .users
            .get_mut(username)
            .ok_or_else(|| LibraryError::UserNotFound {
                username: username.to_string(),
            })?;
        let book = self
            .catalog
            .get_mut(book_id)
            .ok_or_else(|| LibraryError::BookNotFound {
                id: book_id.to_string(),
            })?;

        user.give_back(book)?;
        tracing::debug!(username, book_id, "return completed");
        Ok(())
    }

    /// Look up a book by id
    pub fn book(&self, id: &str) -> Option<&Book> {
        self.catalog.get(id)
    }

    /// Look up a user by username
    pub fn user(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    /// Iterate over all catalog entries (implementation-defined order)
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.catalog.values()
    }

    /// Iterate over all registered users (implementation-defined order)
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Number of catalog entries
    pub fn book_count(&self) -> usize {
        self.catalog.len()
    }

    /// Number of registered users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}
