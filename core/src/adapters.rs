//! # Adapters Layer (Infrastructure)
//!
//! Concrete implementations of the [`crate::ports`]. Only the driven side lives
//! here; the console menus that drive the application live in the CLI crate.
//!
//! ## Rules
//! * Adapters **MUST** depend on `ports` and `domain`.
//! * Adapters **MUST NOT** depend on `application` logic.

pub mod outbound;
