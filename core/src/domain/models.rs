//! # Domain Models
//!
//! ## Entities
//! * [`library::Book`], [`gradebook::Grade`], [`gradebook::StudentRecord`],
//!   [`campus::Student`]: validated field-bearing records.
//!
//! ## Aggregates
//! * [`library::Library`], [`gradebook::StudentRegistry`], [`campus::Course`],
//!   [`campus::University`]: own their children and answer derived queries
//!   (averages, top-N, counts) on demand.
//!
//! ## Role Hierarchies
//! * [`personnel`]: `Person` → `Staff`/`Enrolled` → concrete roles.
//! * [`vehicle`]: `Vehicle` → `Car`/`Motorcycle`/`Truck`.
//! * [`describe`]: priority-ordered behaviour composition.
//!
//! ## Membership
//! Aggregates identify children by their key field (a student's id, a
//! course's name). A `Book` has no identifier, so its key is all three fields.

pub mod campus;
pub mod describe;
pub mod gradebook;
pub mod library;
pub mod personnel;
pub mod vehicle;
