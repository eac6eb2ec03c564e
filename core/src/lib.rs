//! # Academia Core
//!
//! Small domain models (a library catalog, a grade book, a university with
//! courses, university personnel and a vehicle fleet) organised with
//! **Hexagonal Architecture**.
//!
//! * **[`domain`]**: Validated entities, aggregates and role traits. No IO.
//! * **[`ports`]**: Strategy traits the application talks to (persistence,
//!   notification, export).
//! * **[`adapters`]**: Concrete strategies (CSV/JSON files, e-mail/SMS notifiers,
//!   TXT/JSON exporters).
//! * **[`application`]**: Services that hold a domain aggregate plus the
//!   strategies injected at construction.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
