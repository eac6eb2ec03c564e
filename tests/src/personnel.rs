#![cfg(test)]
use academia_core::domain::models::personnel::{
    Administrator, Amount, Enrolled, GraduateStudent, Identity, Security, Staff, Teacher,
    UndergraduateStudent, payroll, tuition_roll,
};
use academia_core::domain::models::vehicle::{Car, Mileage, Motorcycle, Truck, Vehicle};
use serde_json::json;

#[test]
fn roles_dispatch_their_own_amount() {
    let staff: Vec<Box<dyn Staff>> = vec![
        Box::new(Teacher::new("Grace", 45, 1).unwrap()),
        Box::new(Administrator::new("Alan", 41, 2).unwrap()),
        Box::new(Security::new("Ken", 52, 3).unwrap()),
    ];
    assert_eq!(payroll(&staff), 150_000);
    assert_eq!(staff[1].amount(), Amount::Salary(60_000));
    assert_eq!(staff[2].info(), "Security: Ken, Age: 52, ID: 3");

    let advisor = Teacher::new("Grace", 45, 1).unwrap();
    let students: Vec<Box<dyn Enrolled>> = vec![
        Box::new(UndergraduateStudent::new(Identity::new("Ada", 19, 10).unwrap(), 12, 250.0).unwrap()),
        Box::new(GraduateStudent::new(Identity::new("Barbara", 27, 11).unwrap(), "Abstraction", advisor).unwrap()),
    ];
    assert_eq!(tuition_roll(&students), 5_000.0);
    assert_eq!(students[0].role(), "Student");
}

#[test]
fn identity_bounds() {
    assert!(Identity::new("Kid", 15, 1).unwrap_err().is_range_or_emptiness());
    assert!(Identity::new("Elder", 101, 1).is_err());
    assert!(Identity::new("Neg", 30, -1).is_err());
    assert!(Identity::new("Edge", 16, 0).is_ok());
    assert!(Identity::new("Edge", 100, 0).is_ok());
}

#[test]
fn vehicles_share_one_interface() {
    let fleet: Vec<Box<dyn Vehicle>> = vec![
        Box::new(Car::new(Mileage::new(12.5).unwrap())),
        Box::new(Motorcycle::new(Mileage::new(0.0).unwrap())),
        Box::new(Truck::new(Mileage::from_value(&json!(300)).unwrap())),
    ];
    let started: Vec<String> = fleet.iter().map(|v| v.start()).collect();
    assert_eq!(started, ["Car started", "Motorcycle started", "Truck started"]);
    assert_eq!(fleet[2].mileage().value(), 300.0);

    assert!(Mileage::new(-1.0).unwrap_err().is_range_or_emptiness());
    assert!(Mileage::from_value(&json!(false)).unwrap_err().is_kind_mismatch());
}
