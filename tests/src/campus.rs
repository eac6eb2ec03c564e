#![cfg(test)]
use academia_common::error::DomainError;
use academia_common::validate::FieldRecord;
use academia_core::adapters::outbound::storage::JsonCampusStore;
use academia_core::domain::models::campus::{Course, Student, University};
use academia_core::ports::outbound::campus_store::CampusStore;
use serde_json::json;

fn student(id: i64, name: &str, grades: &[f64]) -> Student {
    Student::new(id, name, 20, grades.to_vec()).unwrap()
}

fn university() -> University {
    let shared = student(1, "Ada", &[90.0, 100.0]);
    let mut math = Course::new("Math").unwrap();
    math.add_student(shared.clone()).unwrap();
    math.add_student(student(2, "Alan", &[70.0])).unwrap();

    let mut art = Course::new("Art").unwrap();
    art.add_student(shared).unwrap();
    art.add_student(student(3, "Grace", &[])).unwrap();

    let mut uni = University::new("Tech").unwrap();
    uni.add_course(math).unwrap();
    uni.add_course(art).unwrap();
    uni
}

#[test]
fn shared_student_counted_once() {
    let uni = university();
    let ids: Vec<i64> = uni.all_students().iter().map(|s| s.id()).collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[test]
fn top_students_descending_and_bounded() {
    let uni = university();
    let top: Vec<&str> = uni.top_students(10).iter().map(|s| s.name()).collect();
    assert_eq!(top, ["Ada", "Alan", "Grace"]);
    assert_eq!(uni.top_students(1).len(), 1);
    assert_eq!(uni.top_student().map(Student::name), Some("Ada"));
}

#[test]
fn empty_aggregates_average_to_zero() {
    assert_eq!(Course::new("Empty").unwrap().class_average(), 0.0);
    assert_eq!(student(9, "Nobody", &[]).average(), 0.0);
    assert!(University::new("Void").unwrap().top_student().is_none());
}

#[test]
fn removal_of_non_member_is_not_found() {
    let mut uni = university();
    let err = uni.remove_course("Physics").unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
    assert_eq!(uni.courses().len(), 2);

    let mut course = Course::new("Math").unwrap();
    assert!(course.remove_student(42).is_err());
}

#[test]
fn campus_round_trip_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonCampusStore;
    let mut second = University::new("Arts College").unwrap();
    second.add_course(Course::new("Poetry").unwrap()).unwrap();

    for (n, unis) in [vec![], vec![university()], vec![university(), second]].into_iter().enumerate() {
        let path = dir.path().join(format!("campus_{n}.json"));
        store.save(&unis, &path).unwrap();
        assert_eq!(store.load(&path).unwrap(), unis);
    }
}

#[test]
fn student_grades_replaced_atomically() {
    let mut ada = student(1, "Ada", &[90.0]);
    let err = ada.set_field("grades", &json!([80, 101])).unwrap_err();
    assert!(err.is_range_or_emptiness());
    assert_eq!(ada.grades(), &[90.0]);

    assert!(ada.set_field("grades", &json!([80, true])).unwrap_err().is_kind_mismatch());
    ada.set_field("grades", &json!([80, 60.5])).unwrap();
    assert_eq!(ada.grades(), &[80.0, 60.5]);
}
