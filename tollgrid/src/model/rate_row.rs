use serde::{Deserialize, Serialize};

use super::{Cost, LocationId, UnrolledRow, VehicleType};

/// a distance row extended with the flat toll for each vehicle type
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RateRow {
    pub id_start: LocationId,
    pub id_end: LocationId,
    pub distance: Cost,
    pub moto: Cost,
    pub car: Cost,
    pub rv: Cost,
    pub bus: Cost,
    pub truck: Cost,
}

impl RateRow {
    /// charges `distance × coefficient` for each vehicle type
    pub fn from_unrolled(row: &UnrolledRow) -> RateRow {
        let rate = |v: VehicleType| row.distance.scale(v.rate_coefficient());
        RateRow {
            id_start: row.id_start,
            id_end: row.id_end,
            distance: row.distance,
            moto: rate(VehicleType::Moto),
            car: rate(VehicleType::Car),
            rv: rate(VehicleType::Rv),
            bus: rate(VehicleType::Bus),
            truck: rate(VehicleType::Truck),
        }
    }

    pub fn rate(&self, vehicle_type: VehicleType) -> Cost {
        match vehicle_type {
            VehicleType::Moto => self.moto,
            VehicleType::Car => self.car,
            VehicleType::Rv => self.rv,
            VehicleType::Bus => self.bus,
            VehicleType::Truck => self.truck,
        }
    }
}
