//! Progress bar, percentage and clock labels, and the theme selector.

use super::super::YearProgressApp;
use crate::ui_egui::theme_picker::render_theme_picker;
use egui::{RichText, Stroke};

impl YearProgressApp {
    pub(in crate::ui_egui) fn render_progress_panel(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme.active_theme().clone();
        let font_size = self.settings.font_size;

        egui::Frame::none()
            .stroke(Stroke::new(1.0, theme.progress_border))
            .show(ui, |ui| {
                ui.add(
                    egui::ProgressBar::new(self.display.bar_fraction())
                        .fill(theme.progress_fill)
                        .text(self.display.bar_text())
                        .rounding(0.0),
                );
            });

        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&self.display.percent_text).size(font_size));
            ui.label(RichText::new(&self.display.time_text).size(font_size));
        });

        ui.add_space(4.0);
        render_theme_picker(ui, &mut self.theme);
    }
}
