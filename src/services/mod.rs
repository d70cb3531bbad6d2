// Service module exports

pub mod clock;
pub mod progress;
pub mod refresh;
