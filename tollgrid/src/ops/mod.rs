pub mod matrix_ops;
pub mod rate_ops;
pub mod threshold_ops;
pub mod vehicle_ops;
mod threshold_policy;

pub use threshold_policy::ThresholdPolicy;
