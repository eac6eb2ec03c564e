use std::path::Path;

use academia_common::error::{DomainError, StorageError};
use academia_common::validate::{self, FieldRecord};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::{read_file, write_file};
use crate::domain::models::campus::{Course, Student, University};
use crate::ports::outbound::campus_store::CampusStore;

/// Nested document store for universities.
///
/// Averages are written next to the raw grades for human readers; on load
/// they are skipped and recomputed from the grades.
pub struct JsonCampusStore;

#[derive(Serialize)]
struct UniversityDoc<'a> {
    university: &'a str,
    courses: Vec<CourseDoc<'a>>,
}

#[derive(Serialize)]
struct CourseDoc<'a> {
    course: &'a str,
    class_average: f64,
    students: Vec<StudentDoc<'a>>,
}

#[derive(Serialize)]
struct StudentDoc<'a> {
    id: i64,
    name: &'a str,
    age: i64,
    grades: &'a [f64],
    average: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl<'a> From<&'a University> for UniversityDoc<'a> {
    fn from(university: &'a University) -> Self {
        let courses = university
            .courses()
            .iter()
            .map(|course| CourseDoc {
                course: course.name(),
                class_average: round2(course.class_average()),
                students: course
                    .students()
                    .iter()
                    .map(|s| StudentDoc {
                        id: s.id(),
                        name: s.name(),
                        age: s.age(),
                        grades: s.grades(),
                        average: round2(s.average()),
                    })
                    .collect(),
            })
            .collect();
        Self {
            university: university.name(),
            courses,
        }
    }
}

fn university_from(record: &Value) -> Result<University, DomainError> {
    let name = validate::text("University", validate::entry(record, "university")?)?;
    let mut university = University::new(name)?;

    let courses = validate::entry(record, "courses")?;
    if courses.is_null() {
        return Ok(university);
    }
    for entry in validate::list("Courses", courses)? {
        let name = validate::text("Course", validate::entry(entry, "course")?)?;
        let mut course = Course::new(name)?;
        let students = validate::entry(entry, "students")?;
        if !students.is_null() {
            for student in validate::list("Students", students)? {
                course.add_student(Student::from_fields(student)?)?;
            }
        }
        university.add_course(course)?;
    }
    Ok(university)
}

impl CampusStore for JsonCampusStore {
    fn save(&self, universities: &[University], path: &Path) -> Result<(), StorageError> {
        let docs: Vec<UniversityDoc<'_>> = universities.iter().map(UniversityDoc::from).collect();
        let bytes = serde_json::to_vec_pretty(&docs)?;
        write_file(path, &bytes)?;
        debug!(path = %path.display(), universities = universities.len(), "campus saved");
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Vec<University>, StorageError> {
        let records: Vec<Value> = serde_json::from_str(&read_file(path)?)?;
        let universities = records
            .iter()
            .enumerate()
            .map(|(idx, record)| university_from(record).map_err(|e| StorageError::record(idx + 1, e)))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(path = %path.display(), universities = universities.len(), "campus loaded");
        Ok(universities)
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample() -> University {
        let mut math = Course::new("Math").unwrap();
        math.add_student(Student::new(1, "Ada", 20, vec![90.0, 80.0]).unwrap()).unwrap();
        math.add_student(Student::new(2, "Alan", 22, vec![70.0]).unwrap()).unwrap();

        let mut uni = University::new("Tech").unwrap();
        uni.add_course(math).unwrap();
        uni.add_course(Course::new("Empty").unwrap()).unwrap();
        uni
    }

    #[test]
    fn test_round_trip_keeps_structure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campus.json");
        let universities = vec![sample()];

        JsonCampusStore.save(&universities, &path).unwrap();
        assert_eq!(JsonCampusStore.load(&path).unwrap(), universities);
    }

    #[test]
    fn test_full_precision_grades_survive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campus.json");
        let mut course = Course::new("Math").unwrap();
        course
            .add_student(Student::new(1, "Ada", 20, vec![39.430133835633676]).unwrap())
            .unwrap();
        let mut uni = University::new("Tech").unwrap();
        uni.add_course(course).unwrap();

        JsonCampusStore.save(std::slice::from_ref(&uni), &path).unwrap();
        let loaded = JsonCampusStore.load(&path).unwrap();
        assert_eq!(loaded[0].courses()[0].students()[0].grades(), &[39.430133835633676]);
        assert_eq!(loaded, vec![uni]);
    }

    #[test]
    fn test_derived_fields_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campus.json");

        JsonCampusStore.save(&[sample()], &path).unwrap();
        let doc: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc[0]["university"], "Tech");
        assert_eq!(doc[0]["courses"][0]["class_average"], 77.5);
        assert_eq!(doc[0]["courses"][0]["students"][0]["average"], 85.0);
        assert_eq!(doc[0]["courses"][1]["class_average"], 0.0);
    }

    #[test]
    fn test_stale_averages_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campus.json");
        fs::write(
            &path,
            r#"[{"university": "Tech", "courses": [{"course": "Math", "class_average": 1.0,
                "students": [{"id": 1, "name": "Ada", "age": 20, "grades": [90, 80], "average": 3.0}]}]}]"#,
        )
        .unwrap();

        let loaded = JsonCampusStore.load(&path).unwrap();
        assert_eq!(loaded[0].courses()[0].class_average(), 85.0);
    }

    #[test]
    fn test_duplicate_enrolment_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campus.json");
        fs::write(
            &path,
            r#"[{"university": "Tech", "courses": [{"course": "Math", "students": [
                {"id": 1, "name": "Ada", "age": 20, "grades": []},
                {"id": 1, "name": "Ada", "age": 20, "grades": []}]}]}]"#,
        )
        .unwrap();

        let err = JsonCampusStore.load(&path).unwrap_err();
        assert!(matches!(
            err,
            StorageError::Record {
                index: 1,
                source: DomainError::DuplicateKey { .. }
            }
        ));
    }

    #[test]
    fn test_disagreeing_shared_student_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campus.json");
        fs::write(
            &path,
            r#"[{"university": "Tech", "courses": [
                {"course": "Math", "students": [{"id": 1, "name": "Ada", "age": 20, "grades": [10]}]},
                {"course": "Art", "students": [{"id": 1, "name": "Mallory", "age": 99, "grades": [100]}]}]}]"#,
        )
        .unwrap();

        let err = JsonCampusStore.load(&path).unwrap_err();
        assert!(matches!(
            err,
            StorageError::Record {
                index: 1,
                source: DomainError::Conflict { .. }
            }
        ));
    }

    #[test]
    fn test_out_of_range_age_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campus.json");
        fs::write(
            &path,
            r#"[{"university": "Tech", "courses": [{"course": "Math", "students": [
                {"id": 1, "name": "Kid", "age": 9, "grades": []}]}]}]"#,
        )
        .unwrap();

        let err = JsonCampusStore.load(&path).unwrap_err();
        assert!(err.validation().is_some_and(|v| v.is_range_or_emptiness()));
    }
}
