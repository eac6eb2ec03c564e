use std::path::{Path, PathBuf};

use academia_common::error::StorageError;
use serde::Serialize;
use tracing::debug;

use crate::adapters::outbound::storage::write_file;
use crate::domain::models::gradebook::{PassFailEvaluator, Remark, StudentRecord};
use crate::ports::outbound::report_exporter::ReportExporter;

/// Writes raw grades alongside the derived remarks, average and status.
pub struct JsonExporter;

#[derive(Serialize)]
struct ReportDoc<'a> {
    name: &'a str,
    student_id: &'a str,
    grades: Vec<GradeDoc<'a>>,
    average: f64,
    status: &'static str,
}

#[derive(Serialize)]
struct GradeDoc<'a> {
    subject: &'a str,
    score: f64,
    remark: Remark,
}

impl ReportExporter for JsonExporter {
    fn file_suffix(&self) -> &'static str {
        "_report.json"
    }

    fn export(
        &self,
        student: &StudentRecord,
        evaluator: &PassFailEvaluator,
        out_dir: &Path,
    ) -> Result<PathBuf, StorageError> {
        let report = evaluator.report(student);
        let doc = ReportDoc {
            name: student.name(),
            student_id: student.student_id(),
            grades: report
                .lines
                .iter()
                .map(|line| GradeDoc {
                    subject: line.grade.subject(),
                    score: line.grade.score(),
                    remark: line.remark,
                })
                .collect(),
            average: (report.average * 100.0).round() / 100.0,
            status: report.status(),
        };

        let path = out_dir.join(self.file_name(student));
        write_file(&path, &serde_json::to_vec_pretty(&doc)?)?;
        debug!(path = %path.display(), "json report exported");
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
