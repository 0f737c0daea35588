use std::path::Path;

use super::PipelineConfig;
use crate::model::{TollEdge, TollError};
use crate::ops::{matrix_ops, rate_ops, threshold_ops};
use crate::util::{matrix_csv, table_io};

pub const DISTANCE_MATRIX_FILENAME: &str = "distance_matrix.csv";
pub const UNROLLED_FILENAME: &str = "unrolled_distances.csv";
pub const WITHIN_THRESHOLD_FILENAME: &str = "within_threshold.csv";
pub const TOLL_RATES_FILENAME: &str = "toll_rates.csv";
pub const TIME_BASED_TOLL_RATES_FILENAME: &str = "time_based_toll_rates.csv";

/// column header of the threshold selection table
pub(super) const THRESHOLD_COLUMN: &str = "id_start";

/// runs every stage over the configured edge dataset: distance matrix,
/// unrolled distances, the threshold filter around the reference location,
/// flat toll rates and time-based toll rates. each result is written to the
/// output directory.
pub fn run_pipeline(conf: &PipelineConfig) -> Result<(), TollError> {
    let output_directory = Path::new(&conf.output_directory);
    std::fs::create_dir_all(output_directory).map_err(|source| TollError::IoError {
        filepath: conf.output_directory.clone(),
        source,
    })?;

    let edges: Vec<TollEdge> = table_io::read_rows(Path::new(&conf.edges_file))?;
    log::info!("read {} edges from {}", edges.len(), conf.edges_file);

    let matrix = matrix_ops::calculate_distance_matrix(&edges)?;
    matrix_csv::write_matrix(
        &conf.output_path(DISTANCE_MATRIX_FILENAME),
        &matrix,
        conf.overwrite,
    )?;

    let unrolled = matrix_ops::unroll_distance_matrix(&matrix);
    table_io::write_rows(
        &conf.output_path(UNROLLED_FILENAME),
        &unrolled,
        conf.overwrite,
    )?;

    let within = threshold_ops::find_ids_within_threshold(
        &unrolled,
        conf.reference_id,
        &conf.threshold_policy,
    )?;
    table_io::write_column(
        &conf.output_path(WITHIN_THRESHOLD_FILENAME),
        THRESHOLD_COLUMN,
        &within,
        conf.overwrite,
    )?;

    let rates = rate_ops::calculate_toll_rate(&unrolled);
    table_io::write_rows(
        &conf.output_path(TOLL_RATES_FILENAME),
        &rates,
        conf.overwrite,
    )?;

    let time_rates = rate_ops::calculate_time_based_toll_rates(&rates)?;
    table_io::write_rows(
        &conf.output_path(TIME_BASED_TOLL_RATES_FILENAME),
        &time_rates,
        conf.overwrite,
    )?;

    log::info!("pipeline finished, results in {}", conf.output_directory);
    Ok(())
}
