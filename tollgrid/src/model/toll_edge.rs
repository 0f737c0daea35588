use serde::{Deserialize, Serialize};

use super::LocationId;

/// a row of a toll distance dataset: the known distance between two toll
/// locations. edges are undirected, the distance applies in both directions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TollEdge {
    pub id_start: LocationId,
    pub id_end: LocationId,
    pub distance: f64,
}

impl TollEdge {
    pub fn new(id_start: LocationId, id_end: LocationId, distance: f64) -> TollEdge {
        TollEdge {
            id_start,
            id_end,
            distance,
        }
    }
}
