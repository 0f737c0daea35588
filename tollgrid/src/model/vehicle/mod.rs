//! per-route vehicle toll records and the summaries computed over them.
//! see [`crate::ops::vehicle_ops`] for the operations.
mod car_type;
mod coverage_result;
mod time_coverage_record;
mod vehicle_record;

pub use car_type::CarType;
pub use coverage_result::CoverageResult;
pub use time_coverage_record::TimeCoverageRecord;
pub use vehicle_record::VehicleRecord;
