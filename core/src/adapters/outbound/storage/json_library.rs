use std::path::Path;

use academia_common::error::StorageError;
use academia_common::validate::FieldRecord;
use serde_json::Value;
use tracing::debug;

use super::{read_file, write_file};
use crate::domain::models::library::{Book, Library};
use crate::ports::outbound::library_store::LibraryStore;

/// Structured-document store: an array of `{title, author, year}` records.
pub struct JsonLibraryStore;

impl LibraryStore for JsonLibraryStore {
    fn save(&self, library: &Library, path: &Path) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(library.books())?;
        write_file(path, &bytes)?;
        debug!(path = %path.display(), books = library.len(), "library saved as json");
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Library, StorageError> {
        let records: Vec<Value> = serde_json::from_str(&read_file(path)?)?;
        let books = records
            .iter()
            .enumerate()
            .map(|(idx, record)| Book::from_fields(record).map_err(|e| StorageError::record(idx + 1, e)))
            .collect::<Result<Vec<Book>, StorageError>>()?;

        debug!(path = %path.display(), books = books.len(), "library loaded from json");
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_document_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        let library = Library::with_books(vec![Book::new("Dune", "Frank Herbert", 1965).unwrap()]);

        JsonLibraryStore.save(&library, &path).unwrap();
        let doc: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            doc,
            serde_json::json!([{"title": "Dune", "author": "Frank Herbert", "year": 1965}])
        );
    }

    #[test]
    fn test_bool_year_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, r#"[{"title": "Dune", "author": "Frank Herbert", "year": true}]"#).unwrap();

        let err = JsonLibraryStore.load(&path).unwrap_err();
        assert!(matches!(err, StorageError::Record { index: 1, .. }));
        assert!(err.validation().is_some_and(|v| v.is_kind_mismatch()));
    }

    #[test]
    fn test_non_array_document_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, r#"{"title": "Dune"}"#).unwrap();

        assert!(matches!(JsonLibraryStore.load(&path), Err(StorageError::Json(_))));
    }
}
