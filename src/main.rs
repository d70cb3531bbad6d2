// Year Progress Calendar
// Main entry point

use anyhow::{anyhow, Context, Result};
use year_progress::models::settings::Settings;
use year_progress::ui_egui::{YearProgressApp, WINDOW_TITLE};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Year Progress Calendar");

    let settings = Settings::default();
    settings.validate().context("Invalid settings")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([settings.window_width, settings.window_height])
            .with_position([100.0, 100.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(YearProgressApp::new(cc, settings)))),
    )
    .map_err(|e| anyhow!("Failed to start the application window: {e}"))?;

    log::info!("Year Progress Calendar exited");
    Ok(())
}
