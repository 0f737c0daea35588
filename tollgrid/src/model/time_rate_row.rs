use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::{Cost, LocationId, RateRow, TimeWindow, VehicleType};
use crate::util::day_codec;

/// a flat toll row priced for one day of the week and one time window
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimeRateRow {
    pub id_start: LocationId,
    pub id_end: LocationId,
    #[serde(with = "day_codec")]
    pub start_day: Weekday,
    pub start_time: NaiveTime,
    #[serde(with = "day_codec")]
    pub end_day: Weekday,
    pub end_time: NaiveTime,
    pub moto: Cost,
    pub car: Cost,
    pub rv: Cost,
    pub bus: Cost,
    pub truck: Cost,
}

impl TimeRateRow {
    /// prices `rate_row` within `window` on `day`. the window starts and ends
    /// on the same day.
    pub fn new(rate_row: &RateRow, day: Weekday, window: &TimeWindow) -> TimeRateRow {
        let factor = window.factor_on(day);
        TimeRateRow {
            id_start: rate_row.id_start,
            id_end: rate_row.id_end,
            start_day: day,
            start_time: window.start,
            end_day: day,
            end_time: window.end,
            moto: rate_row.moto.scale(factor),
            car: rate_row.car.scale(factor),
            rv: rate_row.rv.scale(factor),
            bus: rate_row.bus.scale(factor),
            truck: rate_row.truck.scale(factor),
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
