use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::TollError;

/// the days of a week, Monday first
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Saturday and Sunday
pub fn is_weekend(day: Weekday) -> bool {
    day.num_days_from_monday() >= 5
}

/// a daily time-of-day window with the toll factor that applies on weekdays
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub factor: f64,
}

impl TimeWindow {
    /// on weekends this factor replaces the factor of every window
    pub const WEEKEND_FACTOR: f64 = 0.7;

    /// builds a window from `(hour, minute, second)` bounds
    pub fn new(
        start: (u32, u32, u32),
        end: (u32, u32, u32),
        factor: f64,
    ) -> Result<TimeWindow, TollError> {
        Ok(TimeWindow {
            start: clock_time(start)?,
            end: clock_time(end)?,
            factor,
        })
    }

    /// the three windows tolls are expanded over:
    /// `[00:00:00, 10:00:00)` at 0.8, `[10:00:00, 18:00:00)` at 1.2 and
    /// `[18:00:00, 23:59:59]` at 0.8.
    pub fn daily_windows() -> Result<[TimeWindow; 3], TollError> {
        Ok([
            TimeWindow::new((0, 0, 0), (10, 0, 0), 0.8)?,
            TimeWindow::new((10, 0, 0), (18, 0, 0), 1.2)?,
            TimeWindow::new((18, 0, 0), (23, 59, 59), 0.8)?,
        ])
    }

    /// the factor charged in this window on the given day
    pub fn factor_on(&self, day: Weekday) -> f64 {
        if is_weekend(day) {
            Self::WEEKEND_FACTOR
        } else {
            self.factor
        }
    }
}

fn clock_time((hour, minute, second): (u32, u32, u32)) -> Result<NaiveTime, TollError> {
    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
        TollError::InternalError(format!(
            "invalid clock time {hour:02}:{minute:02}:{second:02}"
        ))
    })
}
