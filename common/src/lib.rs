//! Shared building blocks for every academia crate.
//!
//! * [`error`]: the error taxonomy raised by entities, aggregates and stores.
//! * [`validate`]: field rules used by constructors and setters.
//! * [`stats`]: aggregate helpers (averages, stable top-N).
//! * [`config`]: runtime settings assembled by the CLI.

pub mod config;
pub mod error;
pub mod stats;
pub mod validate;
