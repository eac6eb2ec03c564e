//! # Grade Book Model
//!
//! Students identified by a free-text student id, each carrying subject grades.
//! The [`StudentRegistry`] keys them by id; [`GradeCalculator`] and
//! [`PassFailEvaluator`] derive averages and pass/fail verdicts on demand;
//! [`GradeReport`] bundles those derived values for presentation and export.

use std::fmt;

use academia_common::config::DEFAULT_PASSING_SCORE;
use academia_common::error::{DomainError, ValidationError};
use academia_common::stats;
use academia_common::validate::{self, FieldRecord};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grade {
    subject: String,
    score: f64,
}

impl Grade {
    pub fn new(subject: impl Into<String>, score: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            subject: validate::non_empty("Subject", subject)?,
            score: validate::number_in_range("Score", score, 0.0, 100.0)?,
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) -> Result<(), ValidationError> {
        self.subject = validate::non_empty("Subject", subject)?;
        Ok(())
    }

    pub fn set_score(&mut self, score: f64) -> Result<(), ValidationError> {
        self.score = validate::number_in_range("Score", score, 0.0, 100.0)?;
        Ok(())
    }
}

impl FieldRecord for Grade {
    fn from_fields(record: &Value) -> Result<Self, ValidationError> {
        let subject = validate::text("Subject", validate::entry(record, "subject")?)?;
        let score = validate::number("Score", validate::entry(record, "score")?)?;
        Self::new(subject, score)
    }

    fn set_field(&mut self, name: &str, value: &Value) -> Result<(), ValidationError> {
        match name {
            "subject" => self.set_subject(validate::text("Subject", value)?),
            "score" => self.set_score(validate::number("Score", value)?),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    name: String,
    student_id: String,
    grades: Vec<Grade>,
}

impl StudentRecord {
    pub fn new(name: impl Into<String>, student_id: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate::non_empty("Name", name)?,
            student_id: validate::file_stem("Student ID", student_id)?,
            grades: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name = validate::non_empty("Name", name)?;
        Ok(())
    }

    pub fn add_grade(&mut self, grade: Grade) {
        self.grades.push(grade);
    }
}

impl FieldRecord for StudentRecord {
    fn from_fields(record: &Value) -> Result<Self, ValidationError> {
        let name = validate::text("Name", validate::entry(record, "name")?)?;
        let student_id = validate::text("Student ID", validate::entry(record, "student_id")?)?;
        let mut student = Self::new(name, student_id)?;
        let grades = validate::entry(record, "grades")?;
        if !grades.is_null() {
            for grade in validate::list("Grades", grades)? {
                student.add_grade(Grade::from_fields(grade)?);
            }
        }
        Ok(student)
    }

    /// The student id is the registry key and cannot be changed in place.
    fn set_field(&mut self, name: &str, value: &Value) -> Result<(), ValidationError> {
        match name {
            "name" => self.set_name(validate::text("Name", value)?),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student {} (ID: {}) with {} grades",
            self.name,
            self.student_id,
            self.grades.len()
        )
    }
}

/// Students keyed by student id, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct StudentRegistry {
    students: Vec<StudentRecord>,
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, student: StudentRecord) -> Result<(), DomainError> {
        if self.get(student.student_id()).is_some() {
            return Err(DomainError::duplicate("Student ID", student.student_id()));
        }
        self.students.push(student);
        Ok(())
    }

    pub fn get(&self, student_id: &str) -> Option<&StudentRecord> {
        self.students.iter().find(|s| s.student_id == student_id)
    }

    pub fn get_mut(&mut self, student_id: &str) -> Option<&mut StudentRecord> {
        self.students.iter_mut().find(|s| s.student_id == student_id)
    }

    pub fn require(&self, student_id: &str) -> Result<&StudentRecord, DomainError> {
        self.get(student_id)
            .ok_or_else(|| DomainError::not_found("Student ID", student_id))
    }

    pub fn require_mut(&mut self, student_id: &str) -> Result<&mut StudentRecord, DomainError> {
        self.get_mut(student_id)
            .ok_or_else(|| DomainError::not_found("Student ID", student_id))
    }

    pub fn all(&self) -> &[StudentRecord] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GradeCalculator;

impl GradeCalculator {
    /// Mean score; `0.0` for a student without grades.
    pub fn average(&self, student: &StudentRecord) -> f64 {
        stats::average(student.grades.iter().map(Grade::score))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Remark {
    Pass,
    Fail,
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Remark::Pass => f.write_str("Pass"),
            Remark::Fail => f.write_str("Fail"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PassFailEvaluator {
    calculator: GradeCalculator,
    threshold: f64,
}

impl Default for PassFailEvaluator {
    fn default() -> Self {
        Self::new(GradeCalculator, DEFAULT_PASSING_SCORE)
    }
}

impl PassFailEvaluator {
    pub fn new(calculator: GradeCalculator, threshold: f64) -> Self {
        Self {
            calculator,
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn calculator(&self) -> &GradeCalculator {
        &self.calculator
    }

    pub fn remark(&self, score: f64) -> Remark {
        if score >= self.threshold {
            Remark::Pass
        } else {
            Remark::Fail
        }
    }

    pub fn is_passing(&self, student: &StudentRecord) -> bool {
        self.calculator.average(student) >= self.threshold
    }

    pub fn failing_grades<'a>(&self, student: &'a StudentRecord) -> Vec<&'a Grade> {
        student
            .grades
            .iter()
            .filter(|g| self.remark(g.score) == Remark::Fail)
            .collect()
    }

    /// Derives the full report for one student.
    pub fn report<'a>(&self, student: &'a StudentRecord) -> GradeReport<'a> {
        let lines = student
            .grades
            .iter()
            .map(|grade| ReportLine {
                grade,
                remark: self.remark(grade.score),
            })
            .collect();
        GradeReport {
            student,
            lines,
            average: self.calculator.average(student),
            passing: self.is_passing(student),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportLine<'a> {
    pub grade: &'a Grade,
    pub remark: Remark,
}

/// Derived view of a student: per-grade remarks plus the overall verdict.
///
/// Recomputed on every request and never stored back on the student.
#[derive(Debug, Clone)]
pub struct GradeReport<'a> {
    pub student: &'a StudentRecord,
    pub lines: Vec<ReportLine<'a>>,
    pub average: f64,
    pub passing: bool,
}

impl GradeReport<'_> {
    pub fn status(&self) -> &'static str {
        if self.passing { "Passing" } else { "Failing" }
    }

    pub fn failing_count(&self) -> usize {
        self.lines.iter().filter(|l| l.remark == Remark::Fail).count()
    }

    pub fn render(&self) -> String {
        let mut out = vec![
            String::from("Student Report"),
            String::from("======================="),
            format!("Name       : {}", self.student.name()),
            format!("Student ID : {}", self.student.student_id()),
            format!("Number of subjects: {}", self.lines.len()),
            String::new(),
            String::from("Grades:"),
        ];
        for line in &self.lines {
            out.push(format!(
                "  - {}: {} ({})",
                line.grade.subject(),
                line.grade.score(),
                line.remark
            ));
        }
        out.push(String::new());
        out.push(format!("Average Score : {:.2}", self.average));
        out.push(format!("Overall Status: {}", self.status()));
        out.push(String::from("======================="));
        out.join("\n")
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
