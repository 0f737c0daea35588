use serde::{Deserialize, Serialize};

use crate::model::LocationId;

/// whether the records of an (`id`, `id_2`) pair cover a full week
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CoverageResult {
    pub id: LocationId,
    pub id_2: LocationId,
    pub complete: bool,
}
