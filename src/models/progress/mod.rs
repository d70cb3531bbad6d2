// Progress models
// Year boundaries and the displayed progress snapshot

use crate::utils::date::{days_between, end_of_year, start_of_year};
use chrono::{Datelike, NaiveDate};

/// First and last calendar day of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBoundary {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl YearBoundary {
    pub fn for_year(year: i32) -> Self {
        Self {
            start: start_of_year(year),
            end: end_of_year(year),
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_year(date.year())
    }

    /// Number of days in the year, counting both boundaries.
    pub fn total_days(&self) -> i64 {
        days_between(self.start, self.end) + 1
    }

    /// Whole days from the first of the year to `date`.
    pub fn elapsed_days(&self, date: NaiveDate) -> i64 {
        days_between(self.start, date)
    }
}

/// Progress percentage of a year as of a given date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressState {
    /// Percentage in `[0, 100]`
    pub percentage: f64,
    /// The date the percentage was computed from
    pub date: NaiveDate,
}

impl ProgressState {
    pub fn new(percentage: f64, date: NaiveDate) -> Self {
        Self {
            percentage: percentage.clamp(0.0, 100.0),
            date,
        }
    }

    /// Progress as a fraction in `[0, 1]`, for bar widgets.
    pub fn fraction(&self) -> f32 {
        (self.percentage / 100.0) as f32
    }

    /// Progress on an integer scale of `resolution` steps.
    ///
    /// A resolution of 1000 gives tenth-of-a-percent granularity.
    pub fn scaled(&self, resolution: u32) -> u32 {
        let value = (self.percentage / 100.0 * f64::from(resolution)).floor();
        (value as u32).min(resolution)
    }

    /// Text for the percentage label, e.g. `Progress: 49.5890410959%`.
    pub fn label(&self, precision: usize) -> String {
        format!("Progress: {:.*}%", precision, self.percentage)
    }
}
