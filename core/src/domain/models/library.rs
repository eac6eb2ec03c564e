//! # Library Catalog Model
//!
//! A [`Library`] is an ordered shelf of [`Book`]s. Books have no identifier of
//! their own, so two books are the same book when all three fields match.

use std::fmt;

use academia_common::error::{DomainError, ValidationError};
use academia_common::validate::{self, FieldRecord};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Book {
    title: String,
    author: String,
    year: i64,
}

impl Book {
    /// Builds a book, failing on the first invalid field.
    ///
    /// # Errors
    /// * `RangeOrEmptiness` when the title or author is blank, or the year is
    ///   negative or more than one year past the current year.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: validate::non_empty("Title", title)?,
            author: validate::non_empty("Author", author)?,
            year: validate::year("Year", year)?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        self.title = validate::non_empty("Title", title)?;
        Ok(())
    }

    pub fn set_author(&mut self, author: impl Into<String>) -> Result<(), ValidationError> {
        self.author = validate::non_empty("Author", author)?;
        Ok(())
    }

    pub fn set_year(&mut self, year: i64) -> Result<(), ValidationError> {
        self.year = validate::year("Year", year)?;
        Ok(())
    }
}

impl FieldRecord for Book {
    fn from_fields(record: &Value) -> Result<Self, ValidationError> {
        let title = validate::text("Title", validate::entry(record, "title")?)?;
        let author = validate::text("Author", validate::entry(record, "author")?)?;
        let year = validate::integer("Year", validate::entry(record, "year")?)?;
        Self::new(title, author, year)
    }

    fn set_field(&mut self, name: &str, value: &Value) -> Result<(), ValidationError> {
        match name {
            "title" => self.set_title(validate::text("Title", value)?),
            "author" => self.set_author(validate::text("Author", value)?),
            "year" => self.set_year(validate::integer("Year", value)?),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book {} by {} ({})", self.title, self.author, self.year)
    }
}

/// An ordered collection of books. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Removes the first book equal to `book` and hands it back.
    pub fn remove(&mut self, book: &Book) -> Result<Book, DomainError> {
        let idx = self
            .books
            .iter()
            .position(|b| b == book)
            .ok_or_else(|| DomainError::not_found("Book", book.title()))?;
        Ok(self.books.remove(idx))
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.title == title)
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Library with {} books", self.books.len())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
