//! # Application Layer (Service Layer)
//!
//! Each service owns one domain aggregate plus the strategies it was built
//! with, and turns a user intent into domain calls and port calls.
//!
//! Services return the user-facing message of each action; failures
//! propagate as [`anyhow::Error`] wrapping the typed domain or storage error.

pub mod services;
