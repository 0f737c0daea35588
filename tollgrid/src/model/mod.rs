mod cost;
mod distance_matrix;
mod location_id;
mod rate_row;
mod time_rate_row;
mod time_window;
mod toll_edge;
mod toll_error;
mod unrolled_row;
pub mod vehicle;
mod vehicle_type;

pub use cost::Cost;
pub use distance_matrix::DistanceMatrix;
pub use location_id::LocationId;
pub use rate_row::RateRow;
pub use time_rate_row::TimeRateRow;
pub use time_window::{is_weekend, TimeWindow, WEEK};
pub use toll_edge::TollEdge;
pub use toll_error::TollError;
pub use unrolled_row::UnrolledRow;
pub use vehicle_type::VehicleType;
