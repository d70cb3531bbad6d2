// Integration tests for the progress calculation and refresh loop
mod fixtures;

use fixtures::{dates, late_evening_clock, LatestDisplay};
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};
use year_progress::models::progress::YearBoundary;
use year_progress::models::settings::{Settings, ThemeMode};
use year_progress::services::progress::{year_progress, ProgressCalculator};
use year_progress::services::refresh::RefreshLoop;
use year_progress::ui_egui::theme::CalendarTheme;
use year_progress::ui_egui::theme_picker::ThemeToggle;

#[test]
fn test_reference_percentages() {
    let common = year_progress(dates::jul_2_2023());
    let leap = year_progress(dates::jul_2_2024());

    assert!((common - 181.0 / 365.0 * 100.0).abs() < 1e-12);
    assert!((leap - 182.0 / 366.0 * 100.0).abs() < 1e-12);
    assert_eq!(YearBoundary::for_date(dates::leap_day_2024()).total_days(), 366);
}

#[test]
fn test_year_edges() {
    assert_eq!(year_progress(dates::jan_1_2023()), 0.0);
    assert_eq!(year_progress(dates::new_years_eve_2025()), 100.0);
}

#[test]
fn test_app_session_simulation() {
    let settings = Settings::default();
    settings.validate().expect("default settings should validate");

    let mut refresh = RefreshLoop::new(late_evening_clock(), settings.refresh_interval());
    let mut display = LatestDisplay::default();
    let start = Instant::now();

    // Startup tick
    refresh.poll(start, dates::jul_2_2024(), &mut display);
    assert_eq!(display.time.as_deref(), Some("Time: 23:59:58"));
    assert_eq!(display.pushes, 2);

    // User picks New Year's Eve between ticks
    refresh.selection_changed(dates::new_years_eve_2025(), &mut display);
    let state = display.progress.expect("progress pushed");
    assert_eq!(state.percentage, 100.0);
    assert_eq!(state.scaled(settings.bar_resolution), 1000);
    assert_eq!(display.pushes, 3);

    // Too early for the next tick
    refresh.poll(start + Duration::from_millis(50), dates::new_years_eve_2025(), &mut display);
    assert_eq!(display.pushes, 3);

    refresh.poll(start + Duration::from_millis(100), dates::new_years_eve_2025(), &mut display);
    assert_eq!(display.pushes, 5);

    // Window closed
    refresh.stop();
    refresh.poll(start + Duration::from_secs(5), dates::jan_1_2023(), &mut display);
    assert_eq!(display.pushes, 5);
    assert_eq!(display.progress.map(|p| p.date), Some(dates::new_years_eve_2025()));
}

#[test]
fn test_calculator_does_not_depend_on_clock() {
    let calculator = ProgressCalculator::new();
    let first = calculator.calculate(dates::leap_day_2024());
    std::thread::sleep(Duration::from_millis(5));
    let second = calculator.calculate(dates::leap_day_2024());
    assert_eq!(first, second);
}

#[test]
fn test_theme_toggle_restores_light_preset() {
    let mut toggle = ThemeToggle::new(Settings::default().theme);
    let original = toggle.active_theme().clone();

    toggle.select(ThemeMode::Dark);
    assert_eq!(toggle.active_theme(), &CalendarTheme::dark());
    toggle.select(ThemeMode::Light);

    assert_eq!(toggle.active_theme(), &original);
    assert_eq!(toggle.mode(), ThemeMode::Light);
}
