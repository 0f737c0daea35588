use crate::model::{Cost, LocationId, TollError, UnrolledRow};
use crate::ops::ThresholdPolicy;

/// relative width of the band around the reference average distance
pub const THRESHOLD_FRACTION: f64 = 0.1;

/// finds the start locations with a row distance within ±10% of the average
/// distance of `reference`, using [`ThresholdPolicy::RowDistance`].
///
/// see [`find_ids_within_threshold`].
pub fn find_ids_within_ten_percentage_threshold(
    rows: &[UnrolledRow],
    reference: LocationId,
) -> Result<Vec<LocationId>, TollError> {
    find_ids_within_threshold(rows, reference, &ThresholdPolicy::default())
}

/// averages the distances of the rows starting at `reference`, then selects
/// start locations from the full table that fall within
/// `[avg - 10%, avg + 10%]` according to `policy`. the result is ascending
/// and free of duplicates.
///
/// an unreachable reference average has no band, so nothing is selected.
///
/// # Errors
///
/// [`TollError::InvalidInput`] when the table is empty or has no rows starting
/// at `reference`.
pub fn find_ids_within_threshold(
    rows: &[UnrolledRow],
    reference: LocationId,
    policy: &ThresholdPolicy,
) -> Result<Vec<LocationId>, TollError> {
    if rows.is_empty() {
        return Err(TollError::InvalidInput(String::from(
            "cannot apply a distance threshold to an empty table",
        )));
    }
    let reference_distances = rows
        .iter()
        .filter(|row| row.id_start == reference)
        .map(|row| &row.distance);
    let avg = Cost::mean(reference_distances).ok_or_else(|| {
        TollError::InvalidInput(format!("no rows found with id_start {reference}"))
    })?;

    match avg {
        Cost::Unreachable => {
            log::debug!("reference {reference} has an unreachable average distance, selecting none");
            Ok(vec![])
        }
        Cost::Finite(avg) => {
            let lower = avg - THRESHOLD_FRACTION * avg;
            let upper = avg + THRESHOLD_FRACTION * avg;
            log::debug!("reference {reference} average {avg}, band [{lower}, {upper}] ({policy})");
            Ok(policy.select(rows, lower, upper))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id_start: i64, id_end: i64, distance: Cost) -> UnrolledRow {
        UnrolledRow::new(LocationId(id_start), LocationId(id_end), distance)
    }

    fn ids(values: &[i64]) -> Vec<LocationId> {
        values.iter().map(|v| LocationId(*v)).collect()
    }

    fn sample_rows() -> Vec<UnrolledRow> {
        vec![
            // average 10
            row(1, 2, Cost::Finite(8.0)),
            row(1, 3, Cost::Finite(12.0)),
            // average 10.5, each row outside [9, 11]
            row(2, 1, Cost::Finite(8.0)),
            row(2, 3, Cost::Finite(13.0)),
            // average 20, one row within [9, 11]
            row(3, 1, Cost::Finite(9.5)),
            row(3, 2, Cost::Finite(30.5)),
            // average 9.2
            row(4, 1, Cost::Finite(9.2)),
        ]
    }

    #[test]
    fn test_default_scans_row_distances() {
        let result = find_ids_within_ten_percentage_threshold(&sample_rows(), LocationId(1))
            .expect("reference present");
        assert_eq!(result, ids(&[3, 4]));
    }

    #[test]
    fn test_reference_rows_outside_band_not_selected() {
        // band is [9, 11] and only the 9.5 row of location 3 falls inside it
        let rows = vec![
            row(1, 2, Cost::Finite(8.0)),
            row(1, 3, Cost::Finite(12.0)),
            row(3, 1, Cost::Finite(9.5)),
            row(3, 2, Cost::Finite(30.5)),
        ];
        let result = find_ids_within_ten_percentage_threshold(&rows, LocationId(1))
            .expect("reference present");
        assert_eq!(result, ids(&[3]));
    }

    #[test]
    fn test_start_average_policy() {
        let result =
            find_ids_within_threshold(&sample_rows(), LocationId(1), &ThresholdPolicy::StartAverage)
                .expect("reference present");
        assert_eq!(result, ids(&[1, 2, 4]));
    }

    #[test]
    fn test_start_average_always_selects_reference() {
        let rows = sample_rows();
        for reference in 1..=4 {
            let result =
                find_ids_within_threshold(&rows, LocationId(reference), &ThresholdPolicy::StartAverage)
                    .expect("reference present");
            assert!(result.contains(&LocationId(reference)));
            assert!(result.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_zero_average_band() {
        let rows = vec![
            row(1, 2, Cost::ZERO),
            row(2, 1, Cost::ZERO),
            row(3, 1, Cost::Finite(0.5)),
        ];
        let result = find_ids_within_ten_percentage_threshold(&rows, LocationId(1))
            .expect("reference present");
        assert_eq!(result, ids(&[1, 2]));
    }

    #[test]
    fn test_unreachable_excluded() {
        let rows = vec![
            row(1, 2, Cost::Finite(10.0)),
            row(2, 1, Cost::Finite(10.0)),
            row(2, 3, Cost::Unreachable),
            row(3, 2, Cost::Unreachable),
        ];
        let result = find_ids_within_ten_percentage_threshold(&rows, LocationId(1))
            .expect("reference present");
        assert_eq!(result, ids(&[1, 2]));

        let from_unreachable = find_ids_within_ten_percentage_threshold(&rows, LocationId(3))
            .expect("reference present");
        assert!(from_unreachable.is_empty());
    }

    #[test]
    fn test_invalid_reference() {
        assert!(matches!(
            find_ids_within_ten_percentage_threshold(&sample_rows(), LocationId(99)),
            Err(TollError::InvalidInput(_))
        ));
        assert!(matches!(
            find_ids_within_ten_percentage_threshold(&[], LocationId(1)),
            Err(TollError::InvalidInput(_))
        ));
    }
}
