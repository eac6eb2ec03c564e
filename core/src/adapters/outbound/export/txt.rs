use std::path::{Path, PathBuf};

use academia_common::error::StorageError;
use tracing::debug;

use crate::adapters::outbound::storage::write_file;
use crate::domain::models::gradebook::{PassFailEvaluator, StudentRecord};
use crate::ports::outbound::report_exporter::ReportExporter;

/// Writes the rendered text report.
pub struct TxtExporter;

impl ReportExporter for TxtExporter {
    fn file_suffix(&self) -> &'static str {
        "_report.txt"
    }

    fn export(
        &self,
        student: &StudentRecord,
        evaluator: &PassFailEvaluator,
        out_dir: &Path,
    ) -> Result<PathBuf, StorageError> {
        let path = out_dir.join(self.file_name(student));
        let mut text = evaluator.report(student).render();
        text.push('\n');
        write_file(&path, text.as_bytes())?;
        debug!(path = %path.display(), "text report exported");
        Ok(path)
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
