use std::path::Path;

use tracing::info;

use crate::domain::models::gradebook::{
    Grade, GradeReport, PassFailEvaluator, StudentRecord, StudentRegistry,
};
use crate::ports::outbound::notifier::Notifier;
use crate::ports::outbound::report_exporter::ReportExporter;

/// Outcome of recording a grade.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeAdded {
    pub message: String,
    /// Receipt of the below-threshold alert, when one was sent.
    pub alert: Option<String>,
}

pub struct GradebookService {
    registry: StudentRegistry,
    evaluator: PassFailEvaluator,
    notifier: Box<dyn Notifier>,
}

impl GradebookService {
    pub fn new(evaluator: PassFailEvaluator, notifier: Box<dyn Notifier>) -> Self {
        Self {
            registry: StudentRegistry::new(),
            evaluator,
            notifier,
        }
    }

    pub fn registry(&self) -> &StudentRegistry {
        &self.registry
    }

    pub fn evaluator(&self) -> &PassFailEvaluator {
        &self.evaluator
    }

    pub fn add_student(&mut self, name: &str, student_id: &str) -> anyhow::Result<String> {
        let student = StudentRecord::new(name, student_id)?;
        self.registry.insert(student)?;
        info!(student_id, "student registered");
        Ok(format!("Student '{name}' added."))
    }

    pub fn add_grade(&mut self, student_id: &str, subject: &str, score: f64) -> anyhow::Result<GradeAdded> {
        let grade = Grade::new(subject, score)?;
        let student = self.registry.require_mut(student_id)?;
        student.add_grade(grade);

        let alert = (score < self.evaluator.threshold()).then(|| {
            self.notifier.notify(&format!(
                "Student {} failed {subject} with score {score}.",
                student.name()
            ))
        });
        Ok(GradeAdded {
            message: format!("Grade {score} added for {subject}."),
            alert,
        })
    }

    pub fn report(&self, student_id: &str) -> anyhow::Result<GradeReport<'_>> {
        let student = self.registry.require(student_id)?;
        Ok(self.evaluator.report(student))
    }

    /// Reports for every student in registration order.
    pub fn reports(&self) -> Vec<GradeReport<'_>> {
        self.registry
            .all()
            .iter()
            .map(|student| self.evaluator.report(student))
            .collect()
    }

    pub fn export(
        &self,
        student_id: &str,
        exporter: &dyn ReportExporter,
        out_dir: &Path,
    ) -> anyhow::Result<String> {
        let student = self.registry.require(student_id)?;
        let path = exporter.export(student, &self.evaluator, out_dir)?;
        info!(student_id, path = %path.display(), "report exported");
        Ok(format!("Report exported to {}", path.display()))
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
