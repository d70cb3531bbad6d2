use crate::models::progress::ProgressState;
use crate::models::settings::Settings;
use crate::services::refresh::ProgressDisplay;
use crate::utils::date::shift_month;
use chrono::{Datelike, NaiveDate};

/// State for the month calendar
pub struct CalendarState {
    pub selected: NaiveDate,
    /// The month currently being viewed (may differ from selected date)
    pub viewing_date: NaiveDate,
}

impl CalendarState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected: today,
            viewing_date: today,
        }
    }

    /// Select `date` and bring its month into view. Returns true on change.
    pub fn select(&mut self, date: NaiveDate) -> bool {
        self.viewing_date = date;
        if self.selected == date {
            return false;
        }
        self.selected = date;
        true
    }

    pub fn shift_months(&mut self, delta: i32) {
        self.viewing_date = shift_month(self.viewing_date, delta);
    }

    pub fn shift_years(&mut self, delta: i32) {
        if let Some(new_date) = self.viewing_date.with_year(self.viewing_date.year() + delta) {
            self.viewing_date = new_date;
        } else {
            // 29 February in a non-leap target year
            self.viewing_date = shift_month(self.viewing_date, delta * 12);
        }
    }
}

/// What the progress bar and labels currently show
pub struct DisplayState {
    pub progress: Option<ProgressState>,
    /// Percentage shown before the latest update
    pub previous_percentage: f64,
    pub percent_text: String,
    pub time_text: String,
    bar_resolution: u32,
    percent_precision: usize,
}

impl DisplayState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            progress: None,
            previous_percentage: 0.0,
            percent_text: String::new(),
            time_text: String::new(),
            bar_resolution: settings.bar_resolution,
            percent_precision: settings.percent_precision,
        }
    }

    /// Bar position on the integer scale
    pub fn bar_value(&self) -> u32 {
        self.progress
            .map(|state| state.scaled(self.bar_resolution))
            .unwrap_or(0)
    }

    /// Bar fill in `[0, 1]`, quantised to the bar resolution
    pub fn bar_fraction(&self) -> f32 {
        self.bar_value() as f32 / self.bar_resolution as f32
    }

    /// Whole-percent text drawn inside the bar
    pub fn bar_text(&self) -> String {
        let percent = u64::from(self.bar_value()) * 100 / u64::from(self.bar_resolution);
        format!("{}%", percent)
    }
}

impl ProgressDisplay for DisplayState {
    fn show_progress(&mut self, state: ProgressState) {
        if let Some(current) = self.progress {
            self.previous_percentage = current.percentage;
        }
        log::trace!(
            "Progress {:.4}% -> {:.4}%",
            self.previous_percentage,
            state.percentage
        );
        self.percent_text = state.label(self.percent_precision);
        self.progress = Some(state);
    }

    fn show_time(&mut self, time: String) {
        self.time_text = time;
    }
}
