//! The seven-option interactive menu loop
//!
//! This is the thin I/O shell over the [`Library`] operations: it owns
//! all prompting and parsing and passes trimmed line input straight
//! through. No format validation happens here on purpose - empty
//! strings and duplicate ids are accepted as-is, and the core decides
//! what they mean.

use std::io::{BufRead, Write};

use anyhow::Result;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use libris_core::library::{Library, User};

use crate::OutputFormat;

/// One numbered menu option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    RegisterUser,
    BorrowBook,
    ReturnBook,
    DisplayBooks,
    DisplayUsers,
    Exit,
}

impl MenuChoice {
    /// Parse an operator's choice line. `None` means re-prompt.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddBook),
            "2" => Some(Self::RegisterUser),
            "3" => Some(Self::BorrowBook),
            "4" => Some(Self::ReturnBook),
            "5" => Some(Self::DisplayBooks),
            "6" => Some(Self::DisplayUsers),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Drive the menu loop until Exit or end of input.
///
/// Reader and writer are injected so a scripted session can drive the
/// loop in tests; `main` passes locked stdin/stdout.
pub fn run(
    library: &mut Library,
    format: OutputFormat,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    loop {
        write!(
            output,
            "\nLibrary System:\n\
             1. Add Book\n\
             2. Register User\n\
             3. Borrow Book\n\
             4. Return Book\n\
             5. Display Books\n\
             6. Display Users\n\
             7. Exit\n\
             Enter your choice: "
        )?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            // EOF behaves like Exit
            writeln!(output, "\nExiting the system...")?;
            return Ok(());
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(output, "Invalid choice, try again.")?;
            continue;
        };

        match choice {
            MenuChoice::AddBook => {
                let Some((id, title, author)) = prompt_book_fields(input, output)? else {
                    return Ok(());
                };
                let book = library.add_book(id, title, author);
                writeln!(output, "Book added: {book}")?;
            }
            MenuChoice::RegisterUser => {
                let Some(username) = prompt(input, output, "Enter Username: ")? else {
                    return Ok(());
                };
                match library.register_user(username) {
                    Ok(user) => writeln!(output, "User registered: {user}")?,
                    Err(err) => writeln!(output, "{err}")?,
                }
            }
            MenuChoice::BorrowBook => {
                let Some((username, book_id)) =
                    prompt_circulation_fields(input, output, "Enter Book ID to Borrow: ")?
                else {
                    return Ok(());
                };
                match library.borrow_book(&username, &book_id) {
                    Ok(()) => {
                        // the book exists after a successful borrow
                        if let Some(book) = library.book(&book_id) {
                            writeln!(output, "{username} borrowed: {}", book.title)?;
                        }
                    }
                    Err(err) => writeln!(output, "{err}")?,
                }
            }
            MenuChoice::ReturnBook => {
                let Some((username, book_id)) =
                    prompt_circulation_fields(input, output, "Enter Book ID to Return: ")?
                else {
                    return Ok(());
                };
                match library.return_book(&username, &book_id) {
                    Ok(()) => {
                        if let Some(book) = library.book(&book_id) {
                            writeln!(output, "{username} returned: {}", book.title)?;
                        }
                    }
                    Err(err) => writeln!(output, "{err}")?,
                }
            }
            MenuChoice::DisplayBooks => {
                writeln!(output, "\nLibrary Books:")?;
                display_books(library, format, output)?;
            }
            MenuChoice::DisplayUsers => {
                writeln!(output, "\nRegistered Users:")?;
                display_users(library, format, output)?;
            }
            MenuChoice::Exit => {
                writeln!(output, "Exiting the system...")?;
                return Ok(());
            }
        }
    }
}

/// Read one line, stripped of its trailing newline. `None` on EOF.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Print a prompt and read the answer. `None` on EOF.
fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    read_line(input)
}

fn prompt_book_fields(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<(String, String, String)>> {
    let Some(id) = prompt(input, output, "Enter Book ID: ")? else {
        return Ok(None);
    };
    let Some(title) = prompt(input, output, "Enter Book Title: ")? else {
        return Ok(None);
    };
    let Some(author) = prompt(input, output, "Enter Author Name: ")? else {
        return Ok(None);
    };
    Ok(Some((id, title, author)))
}

fn prompt_circulation_fields(
    input: &mut impl BufRead,
    output: &mut impl Write,
    book_label: &str,
) -> Result<Option<(String, String)>> {
    let Some(username) = prompt(input, output, "Enter Username: ")? else {
        return Ok(None);
    };
    let Some(book_id) = prompt(input, output, book_label)? else {
        return Ok(None);
    };
    Ok(Some((username, book_id)))
}

/// Table row for the catalog listing
#[derive(Tabled)]
struct BookRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Table row for the registry listing
#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Borrowed")]
    borrowed: usize,
}

fn display_books(
    library: &Library,
    format: OutputFormat,
    output: &mut impl Write,
) -> Result<()> {
    if library.book_count() == 0 {
        writeln!(output, "No books in the catalog.")?;
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            let books: Vec<_> = library.books().collect();
            writeln!(output, "{}", serde_json::to_string_pretty(&books)?)?;
        }
        OutputFormat::Table => {
            let table_rows: Vec<BookRow> = library
                .books()
                .map(|book| BookRow {
                    id: book.id.clone(),
                    title: book.title.clone(),
                    author: book.author.clone(),
                    status: if book.available {
                        "Available".to_string()
                    } else {
                        "Not Available".to_string()
                    },
                })
                .collect();

            let table = Table::new(&table_rows)
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()))
                .to_string();

            writeln!(output, "{table}")?;
        }
    }

    Ok(())
}

fn display_users(
    library: &Library,
    format: OutputFormat,
    output: &mut impl Write,
) -> Result<()> {
    if library.user_count() == 0 {
        writeln!(output, "No registered users.")?;
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            let users: Vec<&User> = library.users().collect();
            writeln!(output, "{}", serde_json::to_string_pretty(&users)?)?;
        }
        OutputFormat::Table => {
            let table_rows: Vec<UserRow> = library
                .users()
                .map(|user| UserRow {
                    username: user.username.clone(),
                    borrowed: user.held_count(),
                })
                .collect();

            let table = Table::new(&table_rows)
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()))
                .to_string();

            writeln!(output, "{table}")?;
        }
    }

    Ok(())
}
