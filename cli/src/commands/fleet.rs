use std::io::Write;

use academia_common::config::Config;
use academia_core::domain::models::vehicle::{Car, Mileage, Motorcycle, Truck, Vehicle};
use colored::*;

use crate::terminal::{colors, print};

pub struct Mileages {
    pub car: f64,
    pub motorcycle: f64,
    pub truck: f64,
}

pub fn fleet<W: Write>(mileages: &Mileages, cfg: &Config, out: &mut W) -> anyhow::Result<()> {
    let vehicles: Vec<Box<dyn Vehicle>> = vec![
        Box::new(Car::new(Mileage::new(mileages.car)?)),
        Box::new(Motorcycle::new(Mileage::new(mileages.motorcycle)?)),
        Box::new(Truck::new(Mileage::new(mileages.truck)?)),
    ];

    print::header(out, "fleet", cfg.quiet)?;
    for (idx, vehicle) in vehicles.iter().enumerate() {
        print::tree_head(out, idx, vehicle.kind())?;
        let pairs = [
            ("Mileage".to_string(), vehicle.mileage().to_string().color(colors::ACCENT).to_string()),
            ("Start".to_string(), vehicle.start()),
            ("Stop".to_string(), vehicle.stop()),
        ];
        print::as_tree_one_level(out, &pairs)?;
    }

    let total: f64 = vehicles.iter().map(|v| v.mileage().value()).sum();
    print::fat_separator(out)?;
    print::centerln(out, &format!("Total mileage: {total}"))?;
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use academia_common::error::ValidationError;

    #[test]
    fn test_every_vehicle_reports_its_behaviour() {
        colored::control::set_override(false);
        let mileages = Mileages {
            car: 15000.0,
            motorcycle: 8000.0,
            truck: 120000.0,
        };
        let mut out = Vec::new();
        fleet(&mileages, &Config::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("[1] Motorcycle"));
        assert!(text.contains("Motorcycle started"));
        assert!(text.contains("Truck stopped"));
        assert!(text.contains("Total mileage: 143000"));
    }

    #[test]
    fn test_negative_mileage_is_refused() {
        let mileages = Mileages {
            car: -1.0,
            motorcycle: 0.0,
            truck: 0.0,
        };
        let mut out = Vec::new();
        let err = fleet(&mileages, &Config::default(), &mut out).unwrap_err();
        assert!(err
            .downcast_ref::<ValidationError>()
            .is_some_and(ValidationError::is_range_or_emptiness));
        assert!(out.is_empty());
    }
}
