//! # Vehicle Fleet
//!
//! [`Vehicle`] is the abstract level; `Car`, `Motorcycle` and `Truck` each
//! supply their own `start`/`stop` behaviour on top of a shared [`Mileage`].

use std::fmt;

use academia_common::error::ValidationError;
use academia_common::validate;
use serde_json::Value;

/// Distance travelled; any non-negative finite number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Mileage(f64);

impl Mileage {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        Ok(Self(validate::non_negative_number("Mileage", value)?))
    }

    /// Kind-checked construction from an untyped value; booleans are rejected.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::new(validate::number("Mileage", value)?)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Mileage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub trait Vehicle {
    fn kind(&self) -> &'static str;

    fn mileage(&self) -> Mileage;

    fn start(&self) -> String;

    fn stop(&self) -> String;
}

macro_rules! vehicle {
    ($name:ident, $kind:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            mileage: Mileage,
        }

        impl $name {
            pub fn new(mileage: Mileage) -> Self {
                Self { mileage }
            }
        }

        impl Vehicle for $name {
            fn kind(&self) -> &'static str {
                $kind
            }

            fn mileage(&self) -> Mileage {
                self.mileage
            }

            fn start(&self) -> String {
                format!("{} started", $kind)
            }

            fn stop(&self) -> String {
                format!("{} stopped", $kind)
            }
        }
    };
}

vehicle!(Car, "Car");
vehicle!(Motorcycle, "Motorcycle");
vehicle!(Truck, "Truck");

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
