use std::path::{Path, PathBuf};

use academia_common::error::StorageError;

use crate::domain::models::gradebook::{PassFailEvaluator, StudentRecord};

/// Writes one student's report to a file named after their student id.
///
/// Export is one-directional: derived values (remarks, average, status) are
/// computed during the write and never read back.
pub trait ReportExporter {
    /// Suffix appended to the student id to form the file name.
    fn file_suffix(&self) -> &'static str;

    fn export(
        &self,
        student: &StudentRecord,
        evaluator: &PassFailEvaluator,
        out_dir: &Path,
    ) -> Result<PathBuf, StorageError>;

    fn file_name(&self, student: &StudentRecord) -> String {
        format!("{}{}", student.student_id(), self.file_suffix())
    }
}
