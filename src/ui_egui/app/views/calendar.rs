//! Month calendar.
//!
//! Owns the selected date. Clicking a day selects it and recomputes progress.

use super::super::YearProgressApp;
use chrono::{Datelike, Duration, Local, NaiveDate};

impl YearProgressApp {
    pub(in crate::ui_egui) fn render_calendar(&mut self, ui: &mut egui::Ui) {
        let today = Local::now().date_naive();

        ui.group(|ui| {
            ui.set_width(ui.available_width());
            self.render_calendar_header(ui, today);
            ui.separator();
            self.render_calendar_grid(ui, today);
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Today").clicked() {
                    self.select_date(today);
                }
                ui.label(
                    egui::RichText::new(self.calendar.selected.format("%A, %B %d, %Y").to_string())
                        .small(),
                );
            });
        });
    }

    /// Month/Year header with year and month navigation arrows.
    fn render_calendar_header(&mut self, ui: &mut egui::Ui, today: NaiveDate) {
        let viewing_date = self.calendar.viewing_date;

        ui.horizontal(|ui| {
            if ui
                .small_button("◀◀")
                .on_hover_text("Previous year")
                .clicked()
            {
                self.calendar.shift_years(-1);
            }
            if ui
                .small_button("◀")
                .on_hover_text("Previous month")
                .clicked()
            {
                self.calendar.shift_months(-1);
            }

            ui.with_layout(
                egui::Layout::right_to_left(egui::Align::Center),
                |ui| {
                    if ui
                        .small_button("▶▶")
                        .on_hover_text("Next year")
                        .clicked()
                    {
                        self.calendar.shift_years(1);
                    }
                    if ui
                        .small_button("▶")
                        .on_hover_text("Next month")
                        .clicked()
                    {
                        self.calendar.shift_months(1);
                    }

                    ui.with_layout(
                        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                        |ui| {
                            let header = format!("{}", viewing_date.format("%B %Y"));
                            if ui
                                .selectable_label(false, &header)
                                .on_hover_text("Click to show the current month")
                                .clicked()
                            {
                                self.calendar.viewing_date = today;
                            }
                        },
                    );
                },
            );
        });
    }

    /// Day-of-week headers and up to six week rows.
    fn render_calendar_grid(&mut self, ui: &mut egui::Ui, today: NaiveDate) {
        let day_names = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
        let viewing_date = self.calendar.viewing_date;
        let today_color = self.theme.active_theme().today_text;
        let cell_width = (ui.available_width() / 7.0 - 4.0).max(24.0);
        let mut clicked: Option<NaiveDate> = None;

        egui::Grid::new("year_progress_calendar_grid")
            .num_columns(7)
            .spacing([4.0, 2.0])
            .min_col_width(cell_width)
            .show(ui, |ui| {
                for name in &day_names {
                    ui.label(egui::RichText::new(*name).small().strong());
                }
                ui.end_row();

                for week in month_grid(viewing_date) {
                    for current in week {
                        let is_current_month = current.month() == viewing_date.month();
                        let is_selected = current == self.calendar.selected;
                        let day_str = current.day().to_string();

                        let text = if current == today {
                            egui::RichText::new(&day_str).strong().color(today_color)
                        } else if !is_current_month {
                            egui::RichText::new(&day_str).weak()
                        } else {
                            egui::RichText::new(&day_str)
                        };

                        if ui.selectable_label(is_selected, text).clicked() {
                            clicked = Some(current);
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(date) = clicked {
            self.select_date(date);
        }
    }
}

/// Weeks (Sunday first) covering the month of `viewing_date`.
fn month_grid(viewing_date: NaiveDate) -> Vec<[NaiveDate; 7]> {
    let first_of_month = viewing_date.with_day(1).unwrap_or(viewing_date);
    let start_weekday = first_of_month.weekday().num_days_from_sunday() as i64;
    let mut current = first_of_month - Duration::days(start_weekday);

    let mut weeks = Vec::with_capacity(6);
    loop {
        let mut week = [current; 7];
        for slot in week.iter_mut() {
            *slot = current;
            current += Duration::days(1);
        }
        weeks.push(week);

        // Stop once a full week has run past this month
        if weeks.len() == 6 || current.month() != viewing_date.month() {
            break;
        }
    }
    weeks
}
