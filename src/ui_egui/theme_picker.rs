use crate::models::settings::ThemeMode;
use crate::ui_egui::theme::CalendarTheme;
use egui::Context;

/// Two-state Light/Dark selector and the preset it has applied.
#[derive(Debug, Clone)]
pub struct ThemeToggle {
    mode: ThemeMode,
    active: CalendarTheme,
}

impl ThemeToggle {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            active: CalendarTheme::for_mode(mode),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn active_theme(&self) -> &CalendarTheme {
        &self.active
    }

    /// Switch to `mode`. Returns true when the preset changed.
    pub fn select(&mut self, mode: ThemeMode) -> bool {
        if mode == self.mode {
            return false;
        }
        log::info!("Theme changed: {} -> {}", self.mode, mode);
        self.mode = mode;
        self.active = CalendarTheme::for_mode(mode);
        true
    }

    pub fn apply(&self, ctx: &Context) {
        self.active.apply_to_context(ctx);
    }
}

/// Render the theme dropdown. Applies the new preset immediately on change.
pub fn render_theme_picker(ui: &mut egui::Ui, toggle: &mut ThemeToggle) -> bool {
    let mut selected = toggle.mode();

    egui::ComboBox::from_id_source("theme_mode_picker")
        .selected_text(selected.label())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for mode in ThemeMode::ALL {
                ui.selectable_value(&mut selected, mode, mode.label());
            }
        });

    let changed = toggle.select(selected);
    if changed {
        toggle.apply(ui.ctx());
    }
    changed
}
