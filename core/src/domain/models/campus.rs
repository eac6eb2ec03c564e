//! # University Model
//!
//! A [`University`] offers [`Course`]s, each enrolling [`Student`]s. A student
//! is identified by `id`: the same person enrolled in two courses appears in
//! both, and university-wide queries count them once.

use std::collections::HashSet;
use std::fmt;

use academia_common::error::{DomainError, ValidationError};
use academia_common::stats;
use academia_common::validate::{self, FieldRecord};
use serde_json::Value;

pub const MIN_AGE: i64 = 16;
pub const MAX_AGE: i64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: i64,
    name: String,
    age: i64,
    grades: Vec<f64>,
}

fn check_grades(grades: Vec<f64>) -> Result<Vec<f64>, ValidationError> {
    for grade in &grades {
        validate::number_in_range("Grade", *grade, 0.0, 100.0)?;
    }
    Ok(grades)
}

impl Student {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        age: i64,
        grades: Vec<f64>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: validate::non_negative_int("ID", id)?,
            name: validate::non_empty("Name", name)?,
            age: validate::int_in_range("Age", age, MIN_AGE, MAX_AGE)?,
            grades: check_grades(grades)?,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name = validate::non_empty("Name", name)?;
        Ok(())
    }

    pub fn set_age(&mut self, age: i64) -> Result<(), ValidationError> {
        self.age = validate::int_in_range("Age", age, MIN_AGE, MAX_AGE)?;
        Ok(())
    }

    /// Replaces every grade at once; nothing changes if any grade is invalid.
    pub fn set_grades(&mut self, grades: Vec<f64>) -> Result<(), ValidationError> {
        self.grades = check_grades(grades)?;
        Ok(())
    }

    pub fn add_grade(&mut self, grade: f64) -> Result<(), ValidationError> {
        self.grades
            .push(validate::number_in_range("Grade", grade, 0.0, 100.0)?);
        Ok(())
    }

    pub fn average(&self) -> f64 {
        stats::average(self.grades.iter().copied())
    }
}

fn grades_from(value: &Value) -> Result<Vec<f64>, ValidationError> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    validate::list("Grades", value)?
        .iter()
        .map(|g| validate::number("Grade", g))
        .collect()
}

impl FieldRecord for Student {
    fn from_fields(record: &Value) -> Result<Self, ValidationError> {
        let id = validate::integer("ID", validate::entry(record, "id")?)?;
        let name = validate::text("Name", validate::entry(record, "name")?)?;
        let age = validate::integer("Age", validate::entry(record, "age")?)?;
        let grades = grades_from(validate::entry(record, "grades")?)?;
        Self::new(id, name, age, grades)
    }

    /// The id is the membership key and cannot be changed in place.
    fn set_field(&mut self, name: &str, value: &Value) -> Result<(), ValidationError> {
        match name {
            "name" => self.set_name(validate::text("Name", value)?),
            "age" => self.set_age(validate::integer("Age", value)?),
            "grades" => self.set_grades(grades_from(value)?),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Age: {}, Average Grade: {:.2}",
            self.name,
            self.age,
            self.average()
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    name: String,
    students: Vec<Student>,
}

impl Course {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate::non_empty("Course name", name)?,
            students: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn student_mut(&mut self, id: i64) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id == id)
    }

    pub fn add_student(&mut self, student: Student) -> Result<(), DomainError> {
        if self.students.iter().any(|s| s.id == student.id) {
            return Err(DomainError::duplicate("Student", student.id.to_string()));
        }
        self.students.push(student);
        Ok(())
    }

    pub fn remove_student(&mut self, id: i64) -> Result<Student, DomainError> {
        let idx = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| DomainError::not_found("Student", id.to_string()))?;
        Ok(self.students.remove(idx))
    }

    /// Mean of the enrolled students' averages; `0.0` for an empty course.
    pub fn class_average(&self) -> f64 {
        stats::average(self.students.iter().map(Student::average))
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course: {}, Students Enrolled: {}, Class Average: {:.2}",
            self.name,
            self.students.len(),
            self.class_average()
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct University {
    name: String,
    courses: Vec<Course>,
}

impl University {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate::non_empty("University name", name)?,
            courses: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name = validate::non_empty("University name", name)?;
        Ok(())
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    fn course_mut(&mut self, name: &str) -> Result<&mut Course, DomainError> {
        self.courses
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| DomainError::not_found("Course", name))
    }

    /// The copy of student `id` already enrolled somewhere in this university.
    pub fn enrolled(&self, id: i64) -> Option<&Student> {
        self.courses
            .iter()
            .flat_map(|c| c.students.iter())
            .find(|s| s.id == id)
    }

    /// A student enrolled in several courses must be the same record in each.
    fn check_consistent(&self, student: &Student) -> Result<(), DomainError> {
        match self.enrolled(student.id) {
            Some(existing) if existing != student => {
                Err(DomainError::conflict("Student", student.id.to_string()))
            }
            _ => Ok(()),
        }
    }

    /// Adds a course whose name is not taken and whose students agree with
    /// every copy already enrolled under the same id.
    pub fn add_course(&mut self, course: Course) -> Result<(), DomainError> {
        if self.courses.iter().any(|c| c.name == course.name) {
            return Err(DomainError::duplicate("Course", course.name));
        }
        for student in &course.students {
            self.check_consistent(student)?;
        }
        self.courses.push(course);
        Ok(())
    }

    pub fn rename_course(&mut self, old: &str, new: impl Into<String>) -> Result<(), DomainError> {
        let new = validate::non_empty("Course name", new)?;
        if new != old && self.courses.iter().any(|c| c.name == new) {
            return Err(DomainError::duplicate("Course", new));
        }
        self.course_mut(old)?.name = new;
        Ok(())
    }

    pub fn enroll(&mut self, course: &str, student: Student) -> Result<(), DomainError> {
        self.check_consistent(&student)?;
        self.course_mut(course)?.add_student(student)
    }

    pub fn withdraw(&mut self, course: &str, id: i64) -> Result<Student, DomainError> {
        self.course_mut(course)?.remove_student(id)
    }

    pub fn remove_course(&mut self, name: &str) -> Result<Course, DomainError> {
        let idx = self
            .courses
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| DomainError::not_found("Course", name))?;
        Ok(self.courses.remove(idx))
    }

    /// Every enrolled student once, in first-enrolled order.
    pub fn all_students(&self) -> Vec<&Student> {
        let mut seen: HashSet<i64> = HashSet::new();
        self.courses
            .iter()
            .flat_map(|c| c.students.iter())
            .filter(|s| seen.insert(s.id))
            .collect()
    }

    pub fn top_student(&self) -> Option<&Student> {
        self.top_students(1).into_iter().next()
    }

    /// Highest averages first; equal averages keep first-enrolled order.
    pub fn top_students(&self, n: usize) -> Vec<&Student> {
        stats::top_n(self.all_students(), n, |s| s.average())
    }
}

impl fmt::Display for University {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "University: {}, Courses Offered: {}, Total Students: {}",
            self.name,
            self.courses.len(),
            self.all_students().len()
        )
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
