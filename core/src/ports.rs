//! # Ports Layer
//!
//! Traits through which the application reaches the outside world. Each one
//! is a single-purpose strategy chosen when a service is constructed.

pub mod outbound;
