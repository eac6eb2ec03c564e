use std::path::Path;

use academia_common::error::StorageError;

use crate::domain::models::campus::University;

/// Persists a list of universities with their courses and students.
pub trait CampusStore {
    fn save(&self, universities: &[University], path: &Path) -> Result<(), StorageError>;

    fn load(&self, path: &Path) -> Result<Vec<University>, StorageError>;
}
