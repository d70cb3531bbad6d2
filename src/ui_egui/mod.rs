mod app;
pub mod theme;
pub mod theme_picker;

pub use app::{YearProgressApp, WINDOW_TITLE};
