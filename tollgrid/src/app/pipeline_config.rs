use std::path::PathBuf;

use config::Config;
use serde::{Deserialize, Serialize};

use crate::model::{LocationId, TollError};
use crate::ops::ThresholdPolicy;

/// TOML configuration for running every stage over one edge dataset.
///
/// ```toml
/// edges_file = "dataset-3.csv"
/// output_directory = "output"
/// reference_id = 1001400
/// threshold_policy = "row_distance"
/// overwrite = true
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    /// CSV file with `id_start`, `id_end` and `distance` columns
    pub edges_file: String,
    /// directory all result tables are written to, created if missing
    pub output_directory: String,
    /// start location the distance threshold is centered on
    pub reference_id: LocationId,
    #[serde(default)]
    pub threshold_policy: ThresholdPolicy,
    #[serde(default)]
    pub overwrite: bool,
}

impl PipelineConfig {
    pub fn from_file(filepath: &str) -> Result<PipelineConfig, TollError> {
        let config_file = config::File::new(filepath, config::FileFormat::Toml);
        let config = Config::builder()
            .add_source(config_file)
            .build()
            .map_err(|e| TollError::ConfigReadError {
                msg: format!("failed reading '{filepath}'"),
                source: e,
            })?;
        config
            .try_deserialize::<PipelineConfig>()
            .map_err(|e| TollError::ConfigReadError {
                msg: format!("failed deserializing pipeline configuration from '{filepath}'"),
                source: e,
            })
    }

    pub fn output_path(&self, filename: &str) -> PathBuf {
        PathBuf::from(&self.output_directory).join(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_with_defaults() {
        let dir = std::env::temp_dir()
            .join("tollgrid-tests")
            .join("pipeline_config_defaults");
        std::fs::create_dir_all(&dir).expect("temp dir should be writable");
        let filepath = dir.join("pipeline.toml");
        std::fs::write(
            &filepath,
            "edges_file = \"edges.csv\"\noutput_directory = \"out\"\nreference_id = 1001400\n",
        )
        .expect("should write fixture");

        let conf = PipelineConfig::from_file(filepath.to_str().unwrap()).expect("valid config");
        assert_eq!(conf.reference_id, LocationId(1001400));
        assert_eq!(conf.threshold_policy, ThresholdPolicy::RowDistance);
        assert!(!conf.overwrite);
        assert_eq!(conf.output_path("a.csv"), PathBuf::from("out").join("a.csv"));
    }

    #[test]
    fn test_missing_file() {
        let result = PipelineConfig::from_file("/nonexistent/tollgrid/pipeline.toml");
        assert!(matches!(result, Err(TollError::ConfigReadError { .. })));
    }
}
