// Test fixtures - reusable test data
// Provides consistent dates and clocks across all test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use year_progress::models::progress::ProgressState;
use year_progress::services::clock::FixedClock;
use year_progress::services::refresh::ProgressDisplay;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Jan 1, 2023 (common year)
    pub fn jan_1_2023() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
    }

    /// Returns Jul 2, 2023, day 183 of a common year
    pub fn jul_2_2023() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 7, 2).unwrap()
    }

    /// Returns Jul 2, 2024, day 184 of a leap year
    pub fn jul_2_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 2).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Returns Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }
}

/// Clock pinned to 2024-07-02 23:59:58
pub fn late_evening_clock() -> FixedClock {
    let now = NaiveDate::from_ymd_opt(2024, 7, 2)
        .unwrap()
        .and_hms_opt(23, 59, 58)
        .unwrap();
    FixedClock(now)
}

pub fn clock_at(now: NaiveDateTime) -> FixedClock {
    FixedClock(now)
}

/// Display surface that keeps only the latest pushed values
#[derive(Debug, Default)]
pub struct LatestDisplay {
    pub progress: Option<ProgressState>,
    pub time: Option<String>,
    pub pushes: usize,
}

impl ProgressDisplay for LatestDisplay {
    fn show_progress(&mut self, state: ProgressState) {
        self.progress = Some(state);
        self.pushes += 1;
    }

    fn show_time(&mut self, time: String) {
        self.time = Some(time);
        self.pushes += 1;
    }
}
