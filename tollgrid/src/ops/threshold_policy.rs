use std::collections::BTreeMap;
use std::fmt::Display;

use clap::ValueEnum;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::{Cost, LocationId, UnrolledRow};

/// how start locations are compared against the reference distance band
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdPolicy {
    /// a start location matches when any single row distance lies within the band
    #[default]
    RowDistance,
    /// a start location matches when the average distance over all of its
    /// rows lies within the band
    StartAverage,
}

impl ThresholdPolicy {
    /// start locations of `rows` matching the inclusive band `[lower, upper]`,
    /// ascending and without duplicates.
    pub fn select(&self, rows: &[UnrolledRow], lower: f64, upper: f64) -> Vec<LocationId> {
        match self {
            ThresholdPolicy::RowDistance => rows
                .iter()
                .filter(|row| row.distance.within(lower, upper))
                .map(|row| row.id_start)
                .sorted()
                .dedup()
                .collect_vec(),
            ThresholdPolicy::StartAverage => {
                let mut groups: BTreeMap<LocationId, Vec<Cost>> = BTreeMap::new();
                for row in rows.iter() {
                    groups.entry(row.id_start).or_default().push(row.distance);
                }
                groups
                    .into_iter()
                    .filter(|(_, distances)| {
                        Cost::mean(distances).is_some_and(|avg| avg.within(lower, upper))
                    })
                    .map(|(id, _)| id)
                    .collect_vec()
            }
        }
    }
}

impl Display for ThresholdPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThresholdPolicy::RowDistance => write!(f, "row-distance"),
            ThresholdPolicy::StartAverage => write!(f, "start-average"),
        }
    }
}
