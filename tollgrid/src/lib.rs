//! distance matrices and time-based toll rate tables over small toll booth datasets.
//!
//! the stages are independent pure functions over in-memory tables:
//!   1. [`ops::matrix_ops::calculate_distance_matrix`] builds an all-pairs shortest distance matrix
//!   2. [`ops::matrix_ops::unroll_distance_matrix`] flattens that matrix back into rows
//!   3. [`ops::threshold_ops::find_ids_within_ten_percentage_threshold`] filters start points
//!   4. [`ops::rate_ops`] expands distances into vehicle toll rates across a weekly calendar
//!
//! [`app`] and [`util`] hold the thin command line caller and CSV table I/O.
pub mod app;
pub mod model;
pub mod ops;
pub mod util;
