//! File-backed stores.
//!
//! Every store serialises the whole document in memory and hands it to the
//! filesystem in a single write; loads read the whole file before parsing.

mod csv_library;
mod json_campus;
mod json_library;

use std::fs;
use std::path::Path;

use academia_common::config::StoreFormat;
use academia_common::error::StorageError;

use crate::ports::outbound::library_store::LibraryStore;

pub use csv_library::CsvLibraryStore;
pub use json_campus::JsonCampusStore;
pub use json_library::JsonLibraryStore;

/// Picks the library store for a configured format.
pub fn library_store(format: StoreFormat) -> Box<dyn LibraryStore> {
    match format {
        StoreFormat::Csv => Box::new(CsvLibraryStore),
        StoreFormat::Json => Box::new(JsonLibraryStore),
    }
}

pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    fs::write(path, bytes).map_err(|e| StorageError::io(path, e))
}

pub(crate) fn read_file(path: &Path) -> Result<String, StorageError> {
    fs::read_to_string(path).map_err(|e| StorageError::io(path, e))
}
