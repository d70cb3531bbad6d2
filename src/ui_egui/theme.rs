//! Theme module for the year progress window
//!
//! Defines the two colour presets and how they are applied to egui.

use crate::models::settings::ThemeMode;
use egui::Color32;

/// Colours applied to the whole window
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Window and panel background color
    pub app_background: Color32,

    /// Text color for every widget
    pub text_primary: Color32,

    /// Filled part of the progress bar
    pub progress_fill: Color32,

    /// Progress bar outline
    pub progress_border: Color32,

    /// Day number color for today in the calendar grid
    pub today_text: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(255, 255, 255),
            text_primary: Color32::from_rgb(0, 0, 0),
            progress_fill: Color32::from_rgb(0, 123, 255),
            progress_border: Color32::from_rgb(0, 0, 0),
            today_text: Color32::from_rgb(50, 150, 50),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            text_primary: Color32::from_rgb(255, 255, 255),
            progress_fill: Color32::from_rgb(0, 123, 255),
            progress_border: Color32::from_rgb(0, 0, 0),
            today_text: Color32::from_rgb(90, 200, 90),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Build egui visuals for this theme
    pub fn visuals(&self) -> egui::Visuals {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        // egui::ProgressBar paints its fill with the selection colour
        visuals.selection.bg_fill = self.progress_fill;

        visuals
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        ctx.set_visuals(self.visuals());
        log::debug!(
            "Applied {} theme (background {}, text {})",
            if self.is_dark { "dark" } else { "light" },
            Self::color_to_hex(self.app_background),
            Self::color_to_hex(self.text_primary)
        );
    }

    /// Convert Color32 to hex string for display
    pub fn color_to_hex(color: Color32) -> String {
        format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
    }
}
