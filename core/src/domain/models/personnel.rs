//! # University Personnel
//!
//! Everyone on campus shares a validated [`Identity`]. Roles are traits, so the
//! abstract levels ([`Person`], [`Staff`], [`Enrolled`]) cannot be built on
//! their own: only the concrete roles below are types.
//!
//! ```text
//! Person ─┬─ Staff ────┬─ Teacher
//!         │            ├─ Administrator
//!         │            └─ Security
//!         └─ Enrolled ─┬─ UndergraduateStudent
//!                      └─ GraduateStudent
//! ```

use std::fmt;

use academia_common::error::ValidationError;
use academia_common::validate::{self, FieldRecord};
use serde_json::Value;

pub const TEACHER_SALARY: u32 = 50_000;
pub const ADMINISTRATOR_SALARY: u32 = 60_000;
pub const SECURITY_SALARY: u32 = 40_000;
pub const GRADUATE_TUITION: f64 = 2_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    name: String,
    age: i64,
    id: i64,
}

impl Identity {
    pub fn new(name: impl Into<String>, age: i64, id: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate::non_empty("Name", name)?,
            age: validate::int_in_range("Age", age, 16, 100)?,
            id: validate::non_negative_int("ID", id)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name = validate::non_empty("Name", name)?;
        Ok(())
    }

    pub fn set_age(&mut self, age: i64) -> Result<(), ValidationError> {
        self.age = validate::int_in_range("Age", age, 16, 100)?;
        Ok(())
    }

    pub fn set_id(&mut self, id: i64) -> Result<(), ValidationError> {
        self.id = validate::non_negative_int("ID", id)?;
        Ok(())
    }
}

impl FieldRecord for Identity {
    fn from_fields(record: &Value) -> Result<Self, ValidationError> {
        let name = validate::text("Name", validate::entry(record, "name")?)?;
        let age = validate::integer("Age", validate::entry(record, "age")?)?;
        let id = validate::integer("ID", validate::entry(record, "id")?)?;
        Self::new(name, age, id)
    }

    fn set_field(&mut self, name: &str, value: &Value) -> Result<(), ValidationError> {
        match name {
            "name" => self.set_name(validate::text("Name", value)?),
            "age" => self.set_age(validate::integer("Age", value)?),
            "id" => self.set_id(validate::integer("ID", value)?),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}

/// The role-specific figure every concrete role computes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    Salary(u32),
    Tuition(f64),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Salary(s) => write!(f, "salary {s}"),
            Amount::Tuition(t) => write!(f, "tuition {t:.2}"),
        }
    }
}

pub trait Person {
    fn identity(&self) -> &Identity;

    fn identity_mut(&mut self) -> &mut Identity;

    fn role(&self) -> &'static str;

    fn amount(&self) -> Amount;

    fn info(&self) -> String {
        let id = self.identity();
        format!("{}: {}, Age: {}, ID: {}", self.role(), id.name(), id.age(), id.id())
    }
}

pub trait Staff: Person {
    fn salary(&self) -> u32;
}

pub trait Enrolled: Person {
    fn tuition(&self) -> f64;
}

macro_rules! staff_role {
    ($name:ident, $role:literal, $salary:expr) => {
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            identity: Identity,
        }

        impl $name {
            pub fn new(name: impl Into<String>, age: i64, id: i64) -> Result<Self, ValidationError> {
                Ok(Self {
                    identity: Identity::new(name, age, id)?,
                })
            }
        }

        impl Person for $name {
            fn identity(&self) -> &Identity {
                &self.identity
            }

            fn identity_mut(&mut self) -> &mut Identity {
                &mut self.identity
            }

            fn role(&self) -> &'static str {
                $role
            }

            fn amount(&self) -> Amount {
                Amount::Salary(self.salary())
            }
        }

        impl Staff for $name {
            fn salary(&self) -> u32 {
                $salary
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.info())
            }
        }
    };
}

staff_role!(Teacher, "Teacher", TEACHER_SALARY);
staff_role!(Administrator, "Administrator", ADMINISTRATOR_SALARY);
staff_role!(Security, "Security", SECURITY_SALARY);

#[derive(Debug, Clone, PartialEq)]
pub struct UndergraduateStudent {
    identity: Identity,
    credits: i64,
    per_credit_fee: f64,
}

impl UndergraduateStudent {
    pub fn new(
        identity: Identity,
        credits: i64,
        per_credit_fee: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            identity,
            credits: validate::non_negative_int("Credits", credits)?,
            per_credit_fee: validate::non_negative_number("Per credit fee", per_credit_fee)?,
        })
    }

    pub fn credits(&self) -> i64 {
        self.credits
    }

    pub fn per_credit_fee(&self) -> f64 {
        self.per_credit_fee
    }

    pub fn set_credits(&mut self, credits: i64) -> Result<(), ValidationError> {
        self.credits = validate::non_negative_int("Credits", credits)?;
        Ok(())
    }

    pub fn set_per_credit_fee(&mut self, fee: f64) -> Result<(), ValidationError> {
        self.per_credit_fee = validate::non_negative_number("Per credit fee", fee)?;
        Ok(())
    }

    pub fn set_field(&mut self, name: &str, value: &Value) -> Result<(), ValidationError> {
        match name {
            "credits" => self.set_credits(validate::integer("Credits", value)?),
            "per_credit_fee" => self.set_per_credit_fee(validate::number("Per credit fee", value)?),
            other => self.identity.set_field(other, value),
        }
    }
}

impl Person for UndergraduateStudent {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    fn role(&self) -> &'static str {
        "Student"
    }

    fn amount(&self) -> Amount {
        Amount::Tuition(self.tuition())
    }
}

impl Enrolled for UndergraduateStudent {
    fn tuition(&self) -> f64 {
        self.credits as f64 * self.per_credit_fee
    }
}

impl fmt::Display for UndergraduateStudent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UndergraduateStudent(name={}, age={}, ID={}, credits={}, per_credit_fee={})",
            self.identity.name(),
            self.identity.age(),
            self.identity.id(),
            self.credits,
            self.per_credit_fee
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraduateStudent {
    identity: Identity,
    thesis_title: String,
    advisor: Teacher,
}

impl GraduateStudent {
    /// Only a [`Teacher`] can advise; the signature enforces it.
    pub fn new(
        identity: Identity,
        thesis_title: impl Into<String>,
        advisor: Teacher,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            identity,
            thesis_title: validate::non_empty("Thesis title", thesis_title)?,
            advisor,
        })
    }

    pub fn thesis_title(&self) -> &str {
        &self.thesis_title
    }

    pub fn advisor(&self) -> &Teacher {
        &self.advisor
    }

    pub fn set_thesis_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        self.thesis_title = validate::non_empty("Thesis title", title)?;
        Ok(())
    }

    pub fn set_advisor(&mut self, advisor: Teacher) {
        self.advisor = advisor;
    }
}

impl Person for GraduateStudent {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    fn role(&self) -> &'static str {
        "Student"
    }

    fn amount(&self) -> Amount {
        Amount::Tuition(self.tuition())
    }
}

impl Enrolled for GraduateStudent {
    fn tuition(&self) -> f64 {
        GRADUATE_TUITION
    }
}

impl fmt::Display for GraduateStudent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GraduateStudent(name={}, age={}, ID={}, thesis_title={}, advisor={})",
            self.identity.name(),
            self.identity.age(),
            self.identity.id(),
            self.thesis_title,
            self.advisor.identity().name()
        )
    }
}

pub fn payroll(staff: &[Box<dyn Staff>]) -> u64 {
    staff.iter().map(|s| u64::from(s.salary())).sum()
}

pub fn tuition_roll(students: &[Box<dyn Enrolled>]) -> f64 {
    students.iter().map(|s| s.tuition()).sum()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
