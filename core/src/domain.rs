//! # Domain Layer (Core)
//!
//! Entities and aggregates. Every entity is validated on construction and on
//! every mutation, so none is ever observable in an invalid state.
//!
//! ## Contents
//! * **[`models`]**: The entities, aggregates and role hierarchies.

pub mod models;
