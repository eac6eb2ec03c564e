use std::path::Path;

use academia_common::error::StorageError;
use academia_common::validate;
use serde::Deserialize;
use tracing::debug;

use super::{read_file, write_file};
use crate::domain::models::library::{Book, Library};
use crate::ports::outbound::library_store::LibraryStore;

const HEADER: [&str; 3] = ["Title", "Author", "Year"];

/// Flat-record store: a `Title,Author,Year` header, then one book per line.
pub struct CsvLibraryStore;

/// Raw row as read from disk. The year stays text until validated so that a
/// non-numeric year surfaces as a kind mismatch rather than a CSV error.
#[derive(Deserialize)]
struct BookRow {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Author")]
    author: String,
    #[serde(rename = "Year")]
    year: String,
}

impl LibraryStore for CsvLibraryStore {
    fn save(&self, library: &Library, path: &Path) -> Result<(), StorageError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(HEADER)?;
        for book in library.books() {
            let year = book.year().to_string();
            writer.write_record([book.title(), book.author(), year.as_str()])?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| StorageError::io(path, e.into_error()))?;

        write_file(path, &bytes)?;
        debug!(path = %path.display(), books = library.len(), "library saved as csv");
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Library, StorageError> {
        let text = read_file(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());

        let mut books = Vec::new();
        for (idx, row) in reader.deserialize::<BookRow>().enumerate() {
            let row = row?;
            let book = validate::parse_int("Year", &row.year)
                .and_then(|year| Book::new(row.title, row.author, year))
                .map_err(|e| StorageError::record(idx + 1, e))?;
            books.push(book);
        }

        debug!(path = %path.display(), books = books.len(), "library loaded from csv");
        Ok(Library::with_books(books))
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
