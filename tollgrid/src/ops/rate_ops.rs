use crate::model::{RateRow, TimeRateRow, TimeWindow, TollError, UnrolledRow, WEEK};

/// charges each distance row a flat toll per vehicle type, `distance × coefficient`.
pub fn calculate_toll_rate(rows: &[UnrolledRow]) -> Vec<RateRow> {
    rows.iter().map(RateRow::from_unrolled).collect()
}

/// expands every flat toll row across each day of the week (Monday first)
/// and each of the three [`TimeWindow::daily_windows`], producing
/// `rows.len() × 7 × 3` rows.
///
/// weekday tolls are scaled by the window's own factor. weekend tolls are
/// scaled by [`TimeWindow::WEEKEND_FACTOR`] in every window. the expansion
/// does not look at any time of travel on the input row; every row is crossed
/// with the same calendar grid.
pub fn calculate_time_based_toll_rates(rows: &[RateRow]) -> Result<Vec<TimeRateRow>, TollError> {
    let windows = TimeWindow::daily_windows()?;
    let mut result = Vec::with_capacity(rows.len() * WEEK.len() * windows.len());
    for rate_row in rows.iter() {
        for day in WEEK {
            for window in windows.iter() {
                result.push(TimeRateRow::new(rate_row, day, window));
            }
        }
    }
    log::debug!(
        "expanded {} toll rows into {} time-based rows",
        rows.len(),
        result.len()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cost, LocationId, VehicleType};
    use chrono::{NaiveTime, Weekday};

    fn assert_close(actual: Cost, expected: f64) {
        let value = actual.value().expect("expected a finite cost");
        assert!(
            (value - expected).abs() < 1e-9,
            "expected {expected}, found {value}"
        );
    }

    fn flat_rows() -> Vec<RateRow> {
        let rows = vec![
            UnrolledRow::new(LocationId(1), LocationId(2), Cost::Finite(100.0)),
            UnrolledRow::new(LocationId(2), LocationId(1), Cost::Finite(10.0)),
        ];
        calculate_toll_rate(&rows)
    }

    #[test]
    fn test_flat_rates() {
        let rows = flat_rows();
        let row = &rows[0];
        assert_eq!(row.distance, Cost::Finite(100.0));
        assert_close(row.moto, 80.0);
        assert_close(row.car, 120.0);
        assert_close(row.rv, 150.0);
        assert_close(row.bus, 220.0);
        assert_close(row.truck, 360.0);
    }

    #[test]
    fn test_flat_rates_keep_unreachable() {
        let rows = vec![UnrolledRow::new(
            LocationId(1),
            LocationId(2),
            Cost::Unreachable,
        )];
        let rated = calculate_toll_rate(&rows);
        for vehicle_type in VehicleType::ALL {
            assert_eq!(rated[0].rate(vehicle_type), Cost::Unreachable);
        }
    }

    #[test]
    fn test_time_expansion_row_count_and_order() {
        let rows = flat_rows();
        let expanded = calculate_time_based_toll_rates(&rows).expect("fixed windows are valid");
        assert_eq!(expanded.len(), rows.len() * 21);
        assert_eq!(expanded[0].start_day, Weekday::Mon);
        assert_eq!(expanded[0].start_time, NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(expanded[2].end_time, NaiveTime::from_hms_opt(23, 59, 59).unwrap());
        assert_eq!(expanded[20].start_day, Weekday::Sun);
        assert_eq!(expanded[21].id_start, LocationId(2));
        assert!(expanded.iter().all(|r| r.start_day == r.end_day));
    }

    #[test]
    fn test_weekend_override() {
        let rows = flat_rows();
        let expanded = calculate_time_based_toll_rates(&rows[..1]).expect("fixed windows are valid");
        let weekend = expanded
            .iter()
            .filter(|r| r.start_day == Weekday::Sat || r.start_day == Weekday::Sun);
        for r in weekend {
            for vehicle_type in VehicleType::ALL {
                let flat = rows[0].rate(vehicle_type).as_f64();
                assert_close(r.rate(vehicle_type), flat * 0.7);
            }
        }
    }

    #[test]
    fn test_weekday_window_factor() {
        let rows = flat_rows();
        let expanded = calculate_time_based_toll_rates(&rows[..1]).expect("fixed windows are valid");
        let ten = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        let tuesday_midday = expanded
            .iter()
            .find(|r| r.start_day == Weekday::Tue && r.start_time == ten)
            .expect("tuesday midday row");
        assert_eq!(tuesday_midday.end_time, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        for vehicle_type in VehicleType::ALL {
            let flat = rows[0].rate(vehicle_type).as_f64();
            assert_close(tuesday_midday.rate(vehicle_type), flat * 1.2);
        }
        let monday_morning = &expanded[0];
        assert_close(monday_morning.car, 120.0 * 0.8);
    }

    #[test]
    fn test_time_expansion_keeps_unreachable() {
        let rows = calculate_toll_rate(&[UnrolledRow::new(
            LocationId(1),
            LocationId(4),
            Cost::Unreachable,
        )]);
        let expanded = calculate_time_based_toll_rates(&rows).expect("fixed windows are valid");
        assert_eq!(expanded.len(), 21);
        for r in expanded.iter() {
            for vehicle_type in VehicleType::ALL {
                assert_eq!(r.rate(vehicle_type), Cost::Unreachable);
            }
        }
    }

    #[test]
    fn test_empty_table_expands_to_nothing() {
        assert!(calculate_toll_rate(&[]).is_empty());
        assert!(calculate_time_based_toll_rates(&[])
            .expect("fixed windows are valid")
            .is_empty());
    }
}
