use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::model::LocationId;
use crate::util::day_codec;

/// a span of time during which a toll between `id` and `id_2` was recorded
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimeCoverageRecord {
    pub id: LocationId,
    pub id_2: LocationId,
    #[serde(rename = "startDay", with = "day_codec")]
    pub start_day: Weekday,
    #[serde(rename = "startTime")]
    pub start_time: NaiveTime,
    #[serde(rename = "endDay", with = "day_codec")]
    pub end_day: Weekday,
    #[serde(rename = "endTime")]
    pub end_time: NaiveTime,
}
