//! Fixed-rate frame pacing

use std::time::{Duration, Instant};

/// Paces the main loop at a fixed tick rate
#[derive(Debug)]
pub struct FrameClock {
    period: Duration,
    next_tick: Instant,
}

impl FrameClock {
    /// Clock ticking every `tick_seconds`
    pub fn new(tick_seconds: f64) -> Self {
        let period = Duration::from_secs_f64(tick_seconds.max(0.0));
        Self {
            period,
            next_tick: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Advance the schedule by one period and return how long to sleep from
    /// `now`. A late frame resets the schedule rather than catching up.
    pub fn schedule(&mut self, now: Instant) -> Option<Duration> {
        self.next_tick += self.period;
        if self.next_tick > now {
            Some(self.next_tick - now)
        } else {
            self.next_tick = now;
            None
        }
    }

    /// Block until the next tick is due
    pub fn wait(&mut self) {
        if let Some(delay) = self.schedule(Instant::now()) {
            spin_sleep::sleep(delay);
        }
    }
}
