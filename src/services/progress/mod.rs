//! Year progress calculation.
//!
//! Maps a calendar date to the percentage of its year that has elapsed.
//! Pure arithmetic on [`YearBoundary`]; never consults the wall clock.

use crate::models::progress::{ProgressState, YearBoundary};
use crate::utils::date::is_last_day_of_year;
use chrono::NaiveDate;

/// Percentage of `date`'s year elapsed before `date`, in `[0, 100]`.
///
/// 1 January yields 0. 31 December is pinned to exactly 100 even though
/// only `total - 1` days have elapsed by its start.
pub fn year_progress(date: NaiveDate) -> f64 {
    if is_last_day_of_year(date) {
        return 100.0;
    }

    let boundary = YearBoundary::for_date(date);
    let total_days = boundary.total_days();
    let elapsed_days = boundary.elapsed_days(date);

    (elapsed_days as f64 / total_days as f64) * 100.0
}

/// Stateless calculator producing [`ProgressState`] snapshots.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProgressCalculator;

impl ProgressCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, date: NaiveDate) -> ProgressState {
        ProgressState::new(year_progress(date), date)
    }
}
