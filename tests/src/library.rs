#![cfg(test)]
use academia_common::config::StoreFormat;
use academia_common::error::{DomainError, StorageError};
use academia_common::validate::FieldRecord;
use academia_core::adapters::outbound::notify::EmailNotifier;
use academia_core::adapters::outbound::storage;
use academia_core::application::services::library::LibraryService;
use academia_core::domain::models::library::{Book, Library};
use serde_json::json;

fn shelf(n: usize) -> Library {
    let books = [
        ("Dune", "Frank Herbert", 1965),
        ("Emma, Vol. \"1\"", "Jane Austen", 1815),
        ("  Padded  ", "Anon", 0),
    ];
    Library::with_books(
        books
            .iter()
            .take(n)
            .map(|(t, a, y)| Book::new(*t, *a, *y).unwrap())
            .collect(),
    )
}

/// Every format restores every shelf size field for field.
#[test]
fn round_trip_all_formats_and_sizes() {
    let dir = tempfile::tempdir().unwrap();
    for format in [StoreFormat::Csv, StoreFormat::Json] {
        let store = storage::library_store(format);
        for n in [0, 1, 3] {
            let path = dir.path().join(format!("shelf_{n}.{}", format.extension()));
            let library = shelf(n);
            store.save(&library, &path).unwrap();
            assert_eq!(store.load(&path).unwrap(), library, "{format} with {n} books");
        }
    }
}

#[test]
fn one_bad_record_fails_the_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");
    std::fs::write(
        &path,
        json!([
            {"title": "Dune", "author": "Frank Herbert", "year": 1965},
            {"title": "Dune", "author": "Frank Herbert", "year": 1965.5}
        ])
        .to_string(),
    )
    .unwrap();

    let err = storage::library_store(StoreFormat::Json).load(&path).unwrap_err();
    assert!(matches!(err, StorageError::Record { index: 2, .. }));
    assert!(err.validation().is_some_and(|v| v.is_kind_mismatch()));
}

#[test]
fn removing_a_non_member_leaves_count_unchanged() {
    let mut library = shelf(2);
    let stranger = Book::new("Dune", "Frank Herbert", 1966).unwrap();

    let err = library.remove(&stranger).unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
    assert_eq!(library.len(), 2);
}

#[test]
fn dynamic_setters_check_kind_then_range() {
    let mut book = Book::from_fields(&json!({"title": "Dune", "author": "Frank Herbert", "year": 1965})).unwrap();

    assert!(book.set_field("year", &json!(true)).unwrap_err().is_kind_mismatch());
    assert!(book.set_field("year", &json!(-1)).unwrap_err().is_range_or_emptiness());
    assert!(book.set_field("title", &json!("   ")).unwrap_err().is_range_or_emptiness());
    assert_eq!(book.year(), 1965);
    assert_eq!(book.title(), "Dune");
}

#[test]
fn service_persists_through_configured_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.csv");
    let mut service = LibraryService::new(
        Library::new(),
        storage::library_store(StoreFormat::Csv),
        Box::new(EmailNotifier),
    );
    service.add_book(Book::new("Dune", "Frank Herbert", 1965).unwrap()).unwrap();
    assert_eq!(
        service.save(&path).unwrap(),
        format!("Sending email notification: Library saved to {}", path.display())
    );

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "Title,Author,Year\nDune,Frank Herbert,1965\n");
}
