mod lifecycle;
mod state;
mod views;

use self::state::{CalendarState, DisplayState};
use crate::models::settings::Settings;
use crate::services::clock::SystemClock;
use crate::services::refresh::RefreshLoop;
use crate::ui_egui::theme_picker::ThemeToggle;
use chrono::NaiveDate;

pub const WINDOW_TITLE: &str = "Year Progress Calendar";

pub struct YearProgressApp {
    /// Validated runtime configuration
    settings: Settings,
    /// Light/Dark selector and the preset it applied
    theme: ThemeToggle,
    calendar: CalendarState,
    /// Values pushed by the refresh loop
    display: DisplayState,
    refresh: RefreshLoop<SystemClock>,
}

impl eframe::App for YearProgressApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}

impl YearProgressApp {
    /// Select a date and recompute progress right away.
    fn select_date(&mut self, date: NaiveDate) {
        if self.calendar.select(date) {
            self.refresh.selection_changed(date, &mut self.display);
        }
    }
}
