use std::path::Path;

use clap::Subcommand;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::pipeline::THRESHOLD_COLUMN;
use super::{run_pipeline, PipelineConfig};
use crate::model::vehicle::{TimeCoverageRecord, VehicleRecord};
use crate::model::{LocationId, RateRow, TollEdge, TollError, UnrolledRow};
use crate::ops::{matrix_ops, rate_ops, threshold_ops, vehicle_ops, ThresholdPolicy};
use crate::util::{matrix_csv, table_io};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TollOperation {
    /// build the all-pairs distance matrix from an edge list
    DistanceMatrix {
        /// CSV with id_start, id_end and distance columns
        #[arg(long)]
        input_file: String,
        #[arg(long)]
        output_file: String,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// flatten a distance matrix into one row per ordered location pair
    Unroll {
        /// wide matrix CSV as written by distance-matrix
        #[arg(long)]
        input_file: String,
        #[arg(long)]
        output_file: String,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// list start locations whose distance is within 10% of the reference average
    Threshold {
        /// unrolled distances CSV
        #[arg(long)]
        input_file: String,
        #[arg(long)]
        reference_id: i64,
        #[arg(long)]
        output_file: String,
        #[arg(long, value_enum, default_value_t = ThresholdPolicy::RowDistance)]
        threshold_policy: ThresholdPolicy,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// add a toll rate column per vehicle type to unrolled distances
    TollRate {
        #[arg(long)]
        input_file: String,
        #[arg(long)]
        output_file: String,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// expand toll rates across every day of the week and time window
    TimeRate {
        /// toll rates CSV as written by toll-rate
        #[arg(long)]
        input_file: String,
        #[arg(long)]
        output_file: String,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// run every stage from a TOML configuration file
    Pipeline {
        #[arg(long)]
        config_file: String,
    },
    /// pivot per-route car tolls into a location matrix
    CarMatrix {
        #[arg(long)]
        input_file: String,
        #[arg(long)]
        output_file: String,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// count records by car toll bucket
    CarTypeCount {
        #[arg(long)]
        input_file: String,
        #[arg(long)]
        output_file: String,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// list positions of records with an unusually high bus toll
    BusIndexes {
        #[arg(long)]
        input_file: String,
        #[arg(long)]
        output_file: String,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// list routes with a high average truck toll
    TruckRoutes {
        #[arg(long)]
        input_file: String,
        #[arg(long)]
        output_file: String,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// discount or surcharge every cell of a car matrix
    MultiplyMatrix {
        /// wide matrix CSV as written by car-matrix
        #[arg(long)]
        input_file: String,
        #[arg(long)]
        output_file: String,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// check that each location pair has records covering the whole week
    TimeCheck {
        /// CSV with id, id_2, startDay, startTime, endDay and endTime columns
        #[arg(long)]
        input_file: String,
        #[arg(long)]
        output_file: String,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
}

#[derive(Serialize)]
struct CarTypeCountRow {
    car_type: String,
    count: usize,
}


impl TollOperation {
    pub fn run(&self) -> Result<(), TollError> {
        match self {
            TollOperation::DistanceMatrix {
                input_file,
                output_file,
                overwrite,
            } => {
                let edges: Vec<TollEdge> = table_io::read_rows(Path::new(input_file))?;
                let matrix = matrix_ops::calculate_distance_matrix(&edges)?;
                matrix_csv::write_matrix(Path::new(output_file), &matrix, *overwrite)
            }
            TollOperation::Unroll {
                input_file,
                output_file,
                overwrite,
            } => {
                let matrix = matrix_csv::read_matrix(Path::new(input_file))?;
                let rows = matrix_ops::unroll_distance_matrix(&matrix);
                table_io::write_rows(Path::new(output_file), &rows, *overwrite)
            }
            TollOperation::Threshold {
                input_file,
                reference_id,
                output_file,
                threshold_policy,
                overwrite,
            } => {
                let rows: Vec<UnrolledRow> = table_io::read_rows(Path::new(input_file))?;
                let ids = threshold_ops::find_ids_within_threshold(
                    &rows,
                    LocationId(*reference_id),
                    threshold_policy,
                )?;
                log::info!(
                    "{} start locations within the threshold of {}",
                    ids.len(),
                    reference_id
                );
                table_io::write_column(
                    Path::new(output_file),
                    THRESHOLD_COLUMN,
                    &ids,
                    *overwrite,
                )
            }
            TollOperation::TollRate {
                input_file,
                output_file,
                overwrite,
            } => {
                let rows: Vec<UnrolledRow> = table_io::read_rows(Path::new(input_file))?;
                let rates = rate_ops::calculate_toll_rate(&rows);
                table_io::write_rows(Path::new(output_file), &rates, *overwrite)
            }
            TollOperation::TimeRate {
                input_file,
                output_file,
                overwrite,
            } => {
                let rows: Vec<RateRow> = table_io::read_rows(Path::new(input_file))?;
                let time_rates = rate_ops::calculate_time_based_toll_rates(&rows)?;
                table_io::write_rows(Path::new(output_file), &time_rates, *overwrite)
            }
            TollOperation::Pipeline { config_file } => {
                let conf = PipelineConfig::from_file(config_file)?;
                run_pipeline(&conf)
            }
            TollOperation::CarMatrix {
                input_file,
                output_file,
                overwrite,
            } => {
                let records: Vec<VehicleRecord> = table_io::read_rows(Path::new(input_file))?;
                let matrix = vehicle_ops::generate_car_matrix(&records)?;
                matrix_csv::write_matrix(Path::new(output_file), &matrix, *overwrite)
            }
            TollOperation::CarTypeCount {
                input_file,
                output_file,
                overwrite,
            } => {
                let records: Vec<VehicleRecord> = table_io::read_rows(Path::new(input_file))?;
                let out = vehicle_ops::get_type_count(&records)
                    .into_iter()
                    .map(|(car_type, count)| CarTypeCountRow {
                        car_type: car_type.to_string(),
                        count,
                    })
                    .collect_vec();
                table_io::write_rows(Path::new(output_file), &out, *overwrite)
            }
            TollOperation::BusIndexes {
                input_file,
                output_file,
                overwrite,
            } => {
                let records: Vec<VehicleRecord> = table_io::read_rows(Path::new(input_file))?;
                let indexes = vehicle_ops::get_bus_indexes(&records)?;
                table_io::write_column(Path::new(output_file), "index", &indexes, *overwrite)
            }
            TollOperation::TruckRoutes {
                input_file,
                output_file,
                overwrite,
            } => {
                let records: Vec<VehicleRecord> = table_io::read_rows(Path::new(input_file))?;
                let routes = vehicle_ops::filter_routes(&records);
                table_io::write_column(Path::new(output_file), "route", &routes, *overwrite)
            }
            TollOperation::MultiplyMatrix {
                input_file,
                output_file,
                overwrite,
            } => {
                let matrix = matrix_csv::read_matrix(Path::new(input_file))?;
                let multiplied = vehicle_ops::multiply_matrix(&matrix);
                matrix_csv::write_matrix(Path::new(output_file), &multiplied, *overwrite)
            }
            TollOperation::TimeCheck {
                input_file,
                output_file,
                overwrite,
            } => {
                let records: Vec<TimeCoverageRecord> =
                    table_io::read_rows(Path::new(input_file))?;
                let results = vehicle_ops::time_check(&records)?;
                let n_incomplete = results.iter().filter(|r| !r.complete).count();
                if n_incomplete > 0 {
                    log::warn!("{n_incomplete} location pairs do not cover the full week");
                }
                table_io::write_rows(Path::new(output_file), &results, *overwrite)
            }
        }
    }
}
