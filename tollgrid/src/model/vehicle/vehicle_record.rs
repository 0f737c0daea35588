use serde::{Deserialize, Serialize};

use crate::model::LocationId;

/// toll amounts charged per vehicle type between two locations on a route
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    pub id_1: LocationId,
    pub id_2: LocationId,
    pub route: i64,
    pub moto: f64,
    pub car: f64,
    pub rv: f64,
    pub bus: f64,
    pub truck: f64,
}
