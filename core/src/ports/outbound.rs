//! # Outbound Ports (Driven Actors)
//!
//! Contracts for interactions *initiated by the application* towards files and
//! users.
//!
//! ## Rules
//! 1. All items here must be `traits`.
//! 2. No concrete implementations allowed.
//! 3. Using `domain` models in method signatures is allowed and encouraged.
//! 4. These traits are implemented in `adapters/outbound`.
pub mod campus_store;
pub mod library_store;
pub mod notifier;
pub mod report_exporter;
