//! Cross-entity tests for the library module

#[cfg(test)]
mod circulation_tests {
    use crate::library::{Library, LibraryError};

    fn seeded_library() -> Library {
        let mut library = Library::new();
        library.add_book("B1", "Dune", "Herbert");
        library.register_user("alice").unwrap();
        library
    }

    #[test]
    fn add_book_creates_available_entry() {
        let mut library = Library::new();
        let book = library.add_book("B1", "Dune", "Herbert");

        assert_eq!(book.id, "B1");
        assert!(book.available);
        assert_eq!(library.book_count(), 1);
    }

    #[test]
    fn duplicate_book_id_replaces_entry_last_write_wins() {
        let mut library = Library::new();
        library.add_book("B1", "Dune", "Herbert");
        library.add_book("B1", "Dune Messiah", "Herbert");

        assert_eq!(library.book_count(), 1);
        assert_eq!(library.book("B1").unwrap().title, "Dune Messiah");
        assert!(library.book("B1").unwrap().available);
    }

    #[test]
    fn register_user_creates_empty_handed_entry() {
        let mut library = Library::new();
        let user = library.register_user("alice").unwrap();

        assert_eq!(user.username, "alice");
        assert_eq!(user.held_count(), 0);
        assert_eq!(library.user_count(), 1);
    }

    #[test]
    fn duplicate_registration_is_rejected_without_mutation() {
        let mut library = seeded_library();

        let err = library.register_user("alice").unwrap_err();
        assert_eq!(
            err,
            LibraryError::DuplicateUser {
                username: "alice".to_string()
            }
        );
        assert_eq!(library.user_count(), 1);
        assert_eq!(library.user("alice").unwrap().held_count(), 0);
    }

    #[test]
    fn borrow_moves_book_into_held_set() {
        let mut library = seeded_library();

        library.borrow_book("alice", "B1").unwrap();

        assert!(!library.book("B1").unwrap().available);
        assert!(library.user("alice").unwrap().holds("B1"));
    }

    #[test]
    fn unknown_user_is_checked_before_unknown_book() {
        let mut library = seeded_library();

        // both unknown: the user lookup short-circuits
        let err = library.borrow_book("nobody", "missing").unwrap_err();
        assert_eq!(
            err,
            LibraryError::UserNotFound {
                username: "nobody".to_string()
            }
        );

        let err = library.borrow_book("alice", "missing").unwrap_err();
        assert_eq!(
            err,
            LibraryError::BookNotFound {
                id: "missing".to_string()
            }
        );

        // nothing moved
        assert!(library.book("B1").unwrap().available);
        assert_eq!(library.user("alice").unwrap().held_count(), 0);
    }

    #[test]
    fn return_by_non_holder_leaves_all_state_unchanged() {
        let mut library = seeded_library();
        library.register_user("bob").unwrap();
        library.borrow_book("alice", "B1").unwrap();

        let err = library.return_book("bob", "B1").unwrap_err();
        assert_eq!(
            err,
            LibraryError::NotHeldByUser {
                username: "bob".to_string(),
                id: "B1".to_string()
            }
        );

        assert!(!library.book("B1").unwrap().available);
        assert!(library.user("alice").unwrap().holds("B1"));
        assert!(!library.user("bob").unwrap().holds("B1"));
    }

    #[test]
    fn listings_are_lazy_and_restartable() {
        let mut library = seeded_library();
        library.add_book("B2", "Hyperion", "Simmons");

        let first: Vec<_> = library.books().map(|b| b.id.clone()).collect();
        let second: Vec<_> = library.books().map(|b| b.id.clone()).collect();

        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
        assert_eq!(library.users().count(), 1);
    }
}
