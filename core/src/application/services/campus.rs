use std::path::Path;

use tracing::info;

use crate::domain::models::campus::{Student, University};
use crate::ports::outbound::campus_store::CampusStore;

pub const TOP_COUNT: usize = 3;

/// Per-course line of a [`CampusSummary`].
#[derive(Debug, Clone, PartialEq)]
pub struct CourseLine {
    pub name: String,
    pub students: usize,
    pub class_average: f64,
}

/// University-wide figures, with students counted once across courses.
#[derive(Debug, Clone, PartialEq)]
pub struct CampusSummary {
    pub university: String,
    pub courses: Vec<CourseLine>,
    pub unique_students: usize,
    pub top_student: Option<(String, f64)>,
    pub top_three: Vec<(String, f64)>,
}

impl CampusSummary {
    pub fn of(university: &University) -> Self {
        let entry = |s: &Student| (s.name().to_string(), s.average());
        Self {
            university: university.name().to_string(),
            courses: university
                .courses()
                .iter()
                .map(|c| CourseLine {
                    name: c.name().to_string(),
                    students: c.students().len(),
                    class_average: c.class_average(),
                })
                .collect(),
            unique_students: university.all_students().len(),
            top_student: university.top_student().map(entry),
            top_three: university
                .top_students(TOP_COUNT)
                .into_iter()
                .map(entry)
                .collect(),
        }
    }
}

pub struct CampusService {
    universities: Vec<University>,
    store: Box<dyn CampusStore>,
}

impl CampusService {
    pub fn new(store: Box<dyn CampusStore>) -> Self {
        Self {
            universities: Vec::new(),
            store,
        }
    }

    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    pub fn add_university(&mut self, university: University) {
        self.universities.push(university);
    }

    pub fn load(&mut self, path: &Path) -> anyhow::Result<usize> {
        self.universities = self.store.load(path)?;
        info!(path = %path.display(), universities = self.universities.len(), "campus loaded");
        Ok(self.universities.len())
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        self.store.save(&self.universities, path)?;
        info!(path = %path.display(), "campus saved");
        Ok(())
    }

    pub fn summaries(&self) -> Vec<CampusSummary> {
        self.universities.iter().map(CampusSummary::of).collect()
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
    use crate::adapters::outbound::storage::JsonCampusStore;
    use crate::domain::models::campus::Course;

    fn tech() -> University {
        let ada = Student::new(1, "Ada", 20, vec![95.0]).unwrap();
        let mut math = Course::new("Math").unwrap();
        math.add_student(ada.clone()).unwrap();
        math.add_student(Student::new(2, "Alan", 22, vec![70.0]).unwrap()).unwrap();
        let mut art = Course::new("Art").unwrap();
        art.add_student(ada).unwrap();
        art.add_student(Student::new(3, "Grace", 30, vec![88.0]).unwrap()).unwrap();
        art.add_student(Student::new(4, "Linus", 25, vec![60.0]).unwrap()).unwrap();

        let mut uni = University::new("Tech").unwrap();
        uni.add_course(math).unwrap();
        uni.add_course(art).unwrap();
        uni
    }

    #[test]
    fn test_summary_counts_shared_students_once() {
        let summary = CampusSummary::of(&tech());
        assert_eq!(summary.unique_students, 4);
        assert_eq!(summary.courses[1].students, 3);
        assert_eq!(summary.top_student, Some(("Ada".to_string(), 95.0)));
        let names: Vec<_> = summary.top_three.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["Ada", "Grace", "Alan"]);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campus.json");
        let mut svc = CampusService::new(Box::new(JsonCampusStore));
        svc.add_university(tech());
        svc.save(&path).unwrap();

        let mut fresh = CampusService::new(Box::new(JsonCampusStore));
        assert_eq!(fresh.load(&path).unwrap(), 1);
        assert_eq!(fresh.universities(), svc.universities());
    }
}
