use serde::{Deserialize, Serialize};

use super::{Cost, LocationId};

/// one off-diagonal cell of a [`super::DistanceMatrix`] as a table row
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UnrolledRow {
    pub id_start: LocationId,
    pub id_end: LocationId,
    pub distance: Cost,
}

impl UnrolledRow {
    pub fn new(id_start: LocationId, id_end: LocationId, distance: Cost) -> UnrolledRow {
        UnrolledRow {
            id_start,
            id_end,
            distance,
        }
    }
}
