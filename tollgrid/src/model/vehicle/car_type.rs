use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// bucket of a car toll amount.
///
/// variants are declared in name order so that ordered maps keyed by
/// `CarType` list them as "high", "low", "medium".
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum CarType {
    High,
    Low,
    Medium,
}

impl CarType {
    pub const LOW_UPPER_BOUND: f64 = 15.0;
    pub const MEDIUM_UPPER_BOUND: f64 = 25.0;

    /// `≤ 15` is low, `≤ 25` is medium, anything above is high
    pub fn from_amount(car: f64) -> CarType {
        if car <= Self::LOW_UPPER_BOUND {
            CarType::Low
        } else if car <= Self::MEDIUM_UPPER_BOUND {
            CarType::Medium
        } else {
            CarType::High
        }
    }
}

impl Display for CarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarType::High => write!(f, "high"),
            CarType::Low => write!(f, "low"),
            CarType::Medium => write!(f, "medium"),
        }
    }
}
