use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// vehicle classes that are charged a toll
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Moto,
    Car,
    Rv,
    Bus,
    Truck,
}

impl VehicleType {
    pub const ALL: [VehicleType; 5] = [
        VehicleType::Moto,
        VehicleType::Car,
        VehicleType::Rv,
        VehicleType::Bus,
        VehicleType::Truck,
    ];

    /// toll charged per unit of distance
    pub fn rate_coefficient(&self) -> f64 {
        match self {
            VehicleType::Moto => 0.8,
            VehicleType::Car => 1.2,
            VehicleType::Rv => 1.5,
            VehicleType::Bus => 2.2,
            VehicleType::Truck => 3.6,
        }
    }
}

impl Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleType::Moto => write!(f, "moto"),
            VehicleType::Car => write!(f, "car"),
            VehicleType::Rv => write!(f, "rv"),
            VehicleType::Bus => write!(f, "bus"),
            VehicleType::Truck => write!(f, "truck"),
        }
    }
}
