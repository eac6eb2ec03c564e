//! # Application Services
//!
//! * [`library::LibraryService`]: catalog edits, persistence and notifications.
//! * [`gradebook::GradebookService`]: student registry, grading and exports.
//! * [`campus::CampusService`]: university dumps and their summaries.

pub mod campus;
pub mod gradebook;
pub mod library;
