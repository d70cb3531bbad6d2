//! Periodic refresh of the clock and progress displays.
//!
//! The loop is polled from the UI update function. When the interval has
//! elapsed it reads the wall clock, recomputes progress for the selected
//! date, and pushes both to a [`ProgressDisplay`]. It never reads display
//! state back.

use crate::models::progress::ProgressState;
use crate::services::clock::Clock;
use crate::services::progress::ProgressCalculator;
use crate::utils::date::format_clock;
use chrono::NaiveDate;
use std::time::{Duration, Instant};

/// Display surfaces fed by the refresh loop.
pub trait ProgressDisplay {
    fn show_progress(&mut self, state: ProgressState);
    fn show_time(&mut self, time: String);
}

pub struct RefreshLoop<C: Clock> {
    clock: C,
    calculator: ProgressCalculator,
    interval: Duration,
    last_tick: Option<Instant>,
    running: bool,
}

impl<C: Clock> RefreshLoop<C> {
    pub fn new(clock: C, interval: Duration) -> Self {
        Self {
            clock,
            calculator: ProgressCalculator::new(),
            interval,
            last_tick: None,
            running: true,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop ticking; later polls push nothing.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("Refresh loop stopped");
        }
        self.running = false;
    }

    /// Whether a tick should fire at `now`. The first poll is always due.
    pub fn is_due(&self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        match self.last_tick {
            Some(last) => now.saturating_duration_since(last) >= self.interval,
            None => true,
        }
    }

    /// Time left until the next tick, for scheduling a repaint.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        match self.last_tick {
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    /// Run one tick if it is due.
    pub fn poll<D: ProgressDisplay>(&mut self, now: Instant, selected: NaiveDate, display: &mut D) {
        if !self.is_due(now) {
            return;
        }
        self.last_tick = Some(now);
        self.refresh(selected, display);
    }

    /// Recompute progress and clock text and push both to `display`.
    pub fn refresh<D: ProgressDisplay>(&self, selected: NaiveDate, display: &mut D) {
        if !self.running {
            return;
        }
        let time = format_clock(self.clock.now().time());
        log::trace!("Refresh tick at {} for {}", time, selected);

        display.show_progress(self.calculator.calculate(selected));
        display.show_time(format!("Time: {}", time));
    }

    /// Push progress immediately after the user picks a new date.
    pub fn selection_changed<D: ProgressDisplay>(&self, selected: NaiveDate, display: &mut D) {
        if !self.running {
            return;
        }
        log::debug!("Selected date changed to {}", selected);
        display.show_progress(self.calculator.calculate(selected));
    }
}
