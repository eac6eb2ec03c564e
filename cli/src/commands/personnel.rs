use std::io::Write;

use academia_common::config::Config;
use academia_core::domain::models::personnel::{
    Administrator, Enrolled, GraduateStudent, Identity, Security, Staff, Teacher, UndergraduateStudent,
    payroll, tuition_roll,
};
use colored::*;

use crate::terminal::{colors, print};

pub struct Roster {
    pub staff: Vec<Box<dyn Staff>>,
    pub students: Vec<Box<dyn Enrolled>>,
}

/// A small fixed roster covering every concrete role.
pub fn default_roster() -> anyhow::Result<Roster> {
    let advisor = Teacher::new("Grace Hopper", 45, 1)?;
    Ok(Roster {
        staff: vec![
            Box::new(advisor.clone()),
            Box::new(Administrator::new("Alan Turing", 41, 2)?),
            Box::new(Security::new("Ken Thompson", 52, 3)?),
        ],
        students: vec![
            Box::new(UndergraduateStudent::new(Identity::new("Ada Lovelace", 19, 100)?, 15, 300.0)?),
            Box::new(GraduateStudent::new(
                Identity::new("Barbara Liskov", 27, 101)?,
                "Data Abstraction",
                advisor,
            )?),
        ],
    })
}

pub fn personnel<W: Write>(cfg: &Config, out: &mut W) -> anyhow::Result<()> {
    let roster = default_roster()?;

    print::header(out, "staff", cfg.quiet)?;
    for member in &roster.staff {
        writeln!(out, "{} {}", member.info(), member.amount().to_string().color(colors::ACCENT))?;
    }
    writeln!(out)?;
    print::header(out, "students", cfg.quiet)?;
    for student in &roster.students {
        writeln!(out, "{} {}", student.info(), student.amount().to_string().color(colors::ACCENT))?;
    }

    print::fat_separator(out)?;
    let totals = format!(
        "Payroll: {}  Tuition: {:.2}",
        payroll(&roster.staff),
        tuition_roll(&roster.students)
    );
    print::centerln(out, &totals)?;
    Ok(())
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

    #[test]
    fn test_roster_totals() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        personnel(&Config::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Teacher: Grace Hopper, Age: 45, ID: 1 salary 50000"));
        assert!(text.contains("Student: Ada Lovelace, Age: 19, ID: 100 tuition 4500.00"));
        assert!(text.contains("Payroll: 150000  Tuition: 6500.00"));
    }
}
