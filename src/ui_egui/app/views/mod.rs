//! Panels drawn inside the main window.

mod calendar;
mod progress_panel;
