use std::path::Path;

use academia_common::error::StorageError;

use crate::domain::models::library::Library;

/// Persists a whole library in one blocking write or read.
pub trait LibraryStore {
    /// Writes every book, in shelf order, to `path`.
    fn save(&self, library: &Library, path: &Path) -> Result<(), StorageError>;

    /// Reads a library back.
    ///
    /// Loading is all-or-nothing: one invalid record fails the whole load.
    /// For every implementation `load(save(x)) == x`, field for field.
    fn load(&self, path: &Path) -> Result<Library, StorageError>;
}
