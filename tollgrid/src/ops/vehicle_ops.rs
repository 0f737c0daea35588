use std::collections::{BTreeMap, HashSet};

use chrono::NaiveTime;
use itertools::Itertools;

use crate::model::vehicle::{CarType, CoverageResult, TimeCoverageRecord, VehicleRecord};
use crate::model::{Cost, DistanceMatrix, LocationId, TollError};

/// car tolls above this amount are discounted by [`multiply_matrix`]
const MULTIPLY_THRESHOLD: f64 = 20.0;
const MULTIPLY_ABOVE: f64 = 0.75;
const MULTIPLY_AT_OR_BELOW: f64 = 1.25;

/// a bus toll more than this many times the mean is flagged by [`get_bus_indexes`]
const BUS_OUTLIER_MULTIPLE: f64 = 2.0;

/// routes with an average truck toll above this are kept by [`filter_routes`]
const TRUCK_ROUTE_THRESHOLD: f64 = 7.0;

/// pivots the car toll of each record into a matrix over the ascending union of
/// `id_1` and `id_2`. a cell takes the car toll of the first record joining the
/// pair in either direction. the diagonal is zero and pairs without a record
/// are unreachable.
pub fn generate_car_matrix(records: &[VehicleRecord]) -> Result<DistanceMatrix, TollError> {
    if records.is_empty() {
        return Err(TollError::InvalidInput(String::from(
            "cannot build a car matrix from an empty table",
        )));
    }
    let locations = records
        .iter()
        .flat_map(|r| [r.id_1, r.id_2])
        .sorted()
        .dedup()
        .collect_vec();
    let mut matrix = DistanceMatrix::disconnected(locations)?;
    let mut assigned: HashSet<(LocationId, LocationId)> = HashSet::new();
    for record in records.iter().filter(|r| r.id_1 != r.id_2) {
        let pair = (record.id_1.min(record.id_2), record.id_1.max(record.id_2));
        if !assigned.insert(pair) {
            continue;
        }
        let car = Cost::try_from_f64(record.car)?;
        let (i, j) = match (matrix.index_of(record.id_1), matrix.index_of(record.id_2)) {
            (Some(i), Some(j)) => (i, j),
            _ => {
                return Err(TollError::InternalError(format!(
                    "pair {} <-> {} missing from car matrix index",
                    record.id_1, record.id_2
                )))
            }
        };
        matrix.set_by_index(i, j, car);
        matrix.set_by_index(j, i, car);
    }
    Ok(matrix)
}

/// counts records per [`CarType`] bucket of their car toll. only buckets that
/// occur are present.
pub fn get_type_count(records: &[VehicleRecord]) -> BTreeMap<CarType, usize> {
    let mut counts: BTreeMap<CarType, usize> = BTreeMap::new();
    for record in records.iter() {
        *counts.entry(CarType::from_amount(record.car)).or_default() += 1;
    }
    counts
}

/// positions of the records whose bus toll is more than twice the mean bus toll
pub fn get_bus_indexes(records: &[VehicleRecord]) -> Result<Vec<usize>, TollError> {
    if records.is_empty() {
        return Err(TollError::InvalidInput(String::from(
            "cannot compute a mean bus toll over an empty table",
        )));
    }
    let mean = records.iter().map(|r| r.bus).sum::<f64>() / records.len() as f64;
    let limit = BUS_OUTLIER_MULTIPLE * mean;
    let indexes = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.bus > limit)
        .map(|(idx, _)| idx)
        .collect_vec();
    Ok(indexes)
}

/// routes whose average truck toll is greater than 7, ascending
pub fn filter_routes(records: &[VehicleRecord]) -> Vec<i64> {
    let mut by_route: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
    for record in records.iter() {
        by_route.entry(record.route).or_default().push(record.truck);
    }
    by_route
        .into_iter()
        .filter(|(_, trucks)| {
            let mean = trucks.iter().sum::<f64>() / trucks.len() as f64;
            mean > TRUCK_ROUTE_THRESHOLD
        })
        .map(|(route, _)| route)
        .collect_vec()
}

/// scales every finite cell by 0.75 when it is above 20 and by 1.25 otherwise,
/// rounded to one decimal place. unreachable cells stay unreachable.
pub fn multiply_matrix(matrix: &DistanceMatrix) -> DistanceMatrix {
    matrix.map_cells(|cost| match cost {
        Cost::Finite(v) if v > MULTIPLY_THRESHOLD => cost.scale(MULTIPLY_ABOVE).round_to(1),
        Cost::Finite(_) => cost.scale(MULTIPLY_AT_OR_BELOW).round_to(1),
        Cost::Unreachable => Cost::Unreachable,
    })
}

/// checks, for each (`id`, `id_2`) pair, whether its records span all seven
/// days of the week and the full day from 00:00:00 to 23:59:59. results are
/// ordered by pair.
pub fn time_check(records: &[TimeCoverageRecord]) -> Result<Vec<CoverageResult>, TollError> {
    let day_start = NaiveTime::default();
    let day_end = NaiveTime::from_hms_opt(23, 59, 59)
        .ok_or_else(|| TollError::InternalError(String::from("invalid end of day")))?;

    let mut by_pair: BTreeMap<(LocationId, LocationId), Vec<&TimeCoverageRecord>> =
        BTreeMap::new();
    for record in records.iter() {
        by_pair
            .entry((record.id, record.id_2))
            .or_default()
            .push(record);
    }

    let results = by_pair
        .into_iter()
        .map(|((id, id_2), group)| {
            let n_days = group
                .iter()
                .map(|r| r.start_day.num_days_from_monday())
                .unique()
                .count();
            let earliest = group.iter().map(|r| r.start_time).min();
            let latest = group.iter().map(|r| r.end_time).max();
            let complete = n_days == 7 && earliest == Some(day_start) && latest == Some(day_end);
            CoverageResult { id, id_2, complete }
        })
        .collect_vec();
    Ok(results)
}
