// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fixed-period timer polled from the UI loop.
//!
//! egui only runs code when it repaints, so the timer does not fire on its
//! own. The owner polls it each frame and asks for a repaint at
//! [`IntervalTimer::next_deadline`]. Ticks that fell due while no frame
//! ran are reported together, in order. Dropping the timer cancels it.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    next: Instant,
}

impl IntervalTimer {
    /// Start a timer whose first tick is one period after `now`.
    pub fn start(period: Duration, now: Instant) -> Self {
        // A zero period would never catch up.
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next: now + period,
        }
    }

    /// Number of ticks due at `now`. Each is consumed once.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while self.next <= now {
            ticks += 1;
            self.next += self.period;
        }
        ticks
    }

    pub fn next_deadline(&self) -> Instant {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_no_tick_before_first_period() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::start(SECOND, t0);
        assert_eq!(timer.poll(t0), 0);
        assert_eq!(timer.poll(t0 + Duration::from_millis(999)), 0);
        assert_eq!(timer.poll(t0 + SECOND), 1);
        assert_eq!(timer.poll(t0 + SECOND), 0);
    }

    #[test]
    fn test_missed_ticks_are_delivered_once() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::start(SECOND, t0);
        assert_eq!(timer.poll(t0 + Duration::from_millis(3500)), 3);
        assert_eq!(timer.next_deadline(), t0 + Duration::from_secs(4));
        assert_eq!(timer.poll(t0 + Duration::from_millis(3900)), 0);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::start(Duration::ZERO, t0);
        assert_eq!(timer.next_deadline(), t0 + Duration::from_millis(1));
        assert_eq!(timer.poll(t0 + Duration::from_millis(3)), 3);
    }
}
