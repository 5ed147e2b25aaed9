//! Frame timing

use std::time::{Duration, Instant};

use crate::consts::MAX_FRAME_DT;

/// Measures the time between frame starts
///
/// The delta is capped so a stalled window (dragging, debugger, minimized)
/// does not feed one huge step into the simulation.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    max_dt: Duration,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self::starting_at(Instant::now(), max_dt)
    }

    pub fn starting_at(start: Instant, max_dt: f32) -> Self {
        Self {
            last: start,
            // NaN/negative collapse to zero, overflow to the default cap
            max_dt: Duration::try_from_secs_f32(max_dt.max(0.0))
                .unwrap_or(Duration::from_secs_f32(MAX_FRAME_DT)),
        }
    }

    /// Restart the baseline (after resume or pause)
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Seconds since the previous call
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last).min(self.max_dt);
        self.last = now;
        dt.as_secs_f32()
    }
}
