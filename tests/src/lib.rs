//! Cross-crate scenarios: stores, services and domain models exercised
//! together through their public API.

mod campus;
mod describe;
mod gradebook;
mod library;
mod personnel;
