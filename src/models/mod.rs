// Module exports for models

pub mod progress;
pub mod settings;
