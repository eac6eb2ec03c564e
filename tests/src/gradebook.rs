#![cfg(test)]
use academia_core::adapters::outbound::export::{JsonExporter, TxtExporter};
use academia_core::adapters::outbound::notify::EmailNotifier;
use academia_core::application::services::gradebook::GradebookService;
use academia_core::domain::models::gradebook::{Grade, PassFailEvaluator, StudentRecord};
use academia_core::ports::outbound::report_exporter::ReportExporter;

#[test]
fn average_is_fractional_and_one_grade_fails() {
    let mut student = StudentRecord::new("Ada", "s-1").unwrap();
    for (subject, score) in [("Math", 90.0), ("Art", 42.0), ("Latin", 75.0)] {
        student.add_grade(Grade::new(subject, score).unwrap());
    }

    let evaluator = PassFailEvaluator::default();
    let report = evaluator.report(&student);
    assert_eq!(report.average, 69.0);
    assert_eq!(evaluator.failing_grades(&student).len(), 1);
    assert_eq!(report.status(), "Passing");
    assert!(report.render().contains("Average Score : 69.00"));
}

#[test]
fn exporters_name_files_after_student_id() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = GradebookService::new(PassFailEvaluator::default(), Box::new(EmailNotifier));
    service.add_student("Ada", "s-7").unwrap();
    service.add_grade("s-7", "Math", 55.0).unwrap();

    let exporters: [&dyn ReportExporter; 2] = [&TxtExporter, &JsonExporter];
    for exporter in exporters {
        service.export("s-7", exporter, dir.path()).unwrap();
    }

    let text = std::fs::read_to_string(dir.path().join("s-7_report.txt")).unwrap();
    assert!(text.contains("Overall Status: Failing"));

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("s-7_report.json")).unwrap()).unwrap();
    assert_eq!(doc["grades"][0]["remark"], "Fail");
    assert_eq!(doc["status"], "Failing");
}

#[test]
fn export_of_unknown_student_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let service = GradebookService::new(PassFailEvaluator::default(), Box::new(EmailNotifier));

    assert!(service.export("ghost", &TxtExporter, dir.path()).is_err());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
