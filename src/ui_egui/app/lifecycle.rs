use super::state::{CalendarState, DisplayState};
use super::YearProgressApp;
use crate::models::settings::{Settings, ThemeMode};
use crate::services::clock::SystemClock;
use crate::services::refresh::RefreshLoop;
use crate::ui_egui::theme_picker::ThemeToggle;
use chrono::Local;
use egui::{FontId, TextStyle};
use std::time::Instant;

impl YearProgressApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let mode = initial_theme_mode(&settings);
        let theme = ThemeToggle::new(mode);
        theme.apply(&cc.egui_ctx);
        apply_font_size(&cc.egui_ctx, settings.font_size);

        let today = Local::now().date_naive();
        let mut display = DisplayState::new(&settings);
        let refresh = RefreshLoop::new(SystemClock, settings.refresh_interval());
        refresh.refresh(today, &mut display);

        log::info!(
            "Year progress window ready: {} selected, {} theme, refresh every {} ms",
            today,
            mode,
            settings.refresh_interval_ms
        );

        Self {
            settings,
            theme,
            calendar: CalendarState::new(today),
            display,
            refresh,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.refresh
            .poll(now, self.calendar.selected, &mut self.display);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_calendar(ui);
            ui.add_space(8.0);
            self.render_progress_panel(ui);
        });

        // Stands in for a repeating timer: wake up when the next tick is due
        if self.refresh.is_running() {
            ctx.request_repaint_after(self.refresh.time_until_next(Instant::now()));
        }
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.refresh.stop();
        log::info!(
            "Closing year progress window (last theme: {})",
            self.theme.mode()
        );
    }
}

fn initial_theme_mode(settings: &Settings) -> ThemeMode {
    if !settings.follow_system_theme {
        return settings.theme;
    }

    match dark_light::detect() {
        dark_light::Mode::Dark => ThemeMode::Dark,
        dark_light::Mode::Light => ThemeMode::Light,
        dark_light::Mode::Default => {
            log::warn!(
                "System theme preference unavailable, using {}",
                settings.theme
            );
            settings.theme
        }
    }
}

/// Scale every text style from a single body size.
fn apply_font_size(ctx: &egui::Context, size: f32) {
    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Small, FontId::proportional(size * 0.75)),
        (TextStyle::Body, FontId::proportional(size)),
        (TextStyle::Button, FontId::proportional(size)),
        (TextStyle::Monospace, FontId::monospace(size)),
        (TextStyle::Heading, FontId::proportional(size * 1.25)),
    ]
    .into();
    ctx.set_style(style);
}
