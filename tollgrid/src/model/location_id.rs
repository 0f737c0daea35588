use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use super::TollError;

/// identifier of a toll point, as found in the `id_start` / `id_end` columns
/// of a toll dataset.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct LocationId(pub i64);

impl From<i64> for LocationId {
    fn from(value: i64) -> Self {
        LocationId(value)
    }
}

impl Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LocationId {
    type Err = TollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(LocationId)
            .map_err(|e| TollError::InvalidInput(format!("'{s}' is not a location id: {e}")))
    }
}
