// Settings module
// Runtime configuration, validated once at start-up

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

const MAX_REFRESH_INTERVAL_MS: u64 = 60_000;
const MAX_PERCENT_PRECISION: usize = 15;

/// The two selectable colour presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// Label shown in the theme selector
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light Mode",
            ThemeMode::Dark => "Dark Mode",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.label() == label)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("refresh interval must be between 1 and 60000 ms, got {0}")]
    RefreshInterval(u64),
    #[error("progress bar resolution must be positive")]
    BarResolution,
    #[error("percentage precision must be at most 15 digits, got {0}")]
    PercentPrecision(usize),
    #[error("window size must be positive, got {width}x{height}")]
    WindowSize { width: f32, height: f32 },
    #[error("font size must be positive, got {0}")]
    FontSize(f32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: ThemeMode,
    /// Pick the initial theme from the OS preference when available
    pub follow_system_theme: bool,
    pub refresh_interval_ms: u64,
    /// Integer steps of the progress bar (1000 = 0.1% granularity)
    pub bar_resolution: u32,
    /// Decimal places of the percentage label
    pub percent_precision: usize,
    pub window_width: f32,
    pub window_height: f32,
    pub font_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            follow_system_theme: false,
            refresh_interval_ms: 100,
            bar_resolution: 1000,
            percent_precision: 10,
            window_width: 400.0,
            window_height: 400.0,
            font_size: 16.0,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.refresh_interval_ms == 0 || self.refresh_interval_ms > MAX_REFRESH_INTERVAL_MS {
            return Err(SettingsError::RefreshInterval(self.refresh_interval_ms));
        }
        if self.bar_resolution == 0 {
            return Err(SettingsError::BarResolution);
        }
        if self.percent_precision > MAX_PERCENT_PRECISION {
            return Err(SettingsError::PercentPrecision(self.percent_precision));
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(SettingsError::WindowSize {
                width: self.window_width,
                height: self.window_height,
            });
        }
        if !(self.font_size > 0.0) {
            return Err(SettingsError::FontSize(self.font_size));
        }
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}
