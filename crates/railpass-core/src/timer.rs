//! Frame-polled timer primitives.
//!
//! The UI is single-threaded and frame-driven, so delays are modeled as
//! plain values holding a due instant, polled once per frame. Both types
//! carry an explicit `cancel` so teardown can stop pending work
//! deterministically instead of leaking a live timer.

use std::time::{Duration, Instant};

/// A cancellable one-shot delay.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    due: Instant,
    fired: bool,
    cancelled: bool,
}

impl Deadline {
    /// A deadline `delay` from `now`.
    pub fn after(now: Instant, delay: Duration) -> Self {
        Self {
            due: now + delay,
            fired: false,
            cancelled: false,
        }
    }

    /// True exactly once: on the first poll at or past the due instant.
    pub fn fire(&mut self, now: Instant) -> bool {
        if self.cancelled || self.fired || now < self.due {
            return false;
        }
        self.fired = true;
        true
    }

    /// True while the deadline has neither fired nor been cancelled.
    pub fn is_pending(&self) -> bool {
        !self.fired && !self.cancelled
    }

    /// Prevents the deadline from ever firing.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

/// A cancellable fixed-period ticker.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    next: Instant,
    period: Duration,
    cancelled: bool,
}

impl Ticker {
    /// A ticker whose first tick is one `period` after `now`.
    pub fn every(now: Instant, period: Duration) -> Self {
        Self {
            next: now + period,
            period,
            cancelled: false,
        }
    }

    /// Number of periods that elapsed since the last poll.
    ///
    /// Reports every missed period after a slow frame, keeping long
    /// countdowns on wall-clock schedule.
    pub fn poll(&mut self, now: Instant) -> u32 {
        if self.cancelled {
            return 0;
        }
        let mut ticks = 0;
        while now >= self.next {
            self.next += self.period;
            ticks += 1;
        }
        ticks
    }

    /// Stops the ticker; subsequent polls report nothing.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn deadline_fires_once_at_due_instant() {
        let t0 = Instant::now();
        let mut deadline = Deadline::after(t0, SECOND);

        assert!(!deadline.fire(t0));
        assert!(!deadline.fire(t0 + Duration::from_millis(999)));
        assert!(deadline.is_pending());

        assert!(deadline.fire(t0 + SECOND));
        assert!(!deadline.is_pending());

        // One-shot: later polls stay quiet.
        assert!(!deadline.fire(t0 + 2 * SECOND));
    }

    #[test]
    fn cancelled_deadline_never_fires() {
        let t0 = Instant::now();
        let mut deadline = Deadline::after(t0, SECOND);
        deadline.cancel();

        assert!(!deadline.is_pending());
        assert!(!deadline.fire(t0 + 10 * SECOND));
    }

    #[test]
    fn ticker_reports_elapsed_periods() {
        let t0 = Instant::now();
        let mut ticker = Ticker::every(t0, SECOND);

        assert_eq!(ticker.poll(t0), 0);
        assert_eq!(ticker.poll(t0 + Duration::from_millis(500)), 0);
        assert_eq!(ticker.poll(t0 + SECOND), 1);
        assert_eq!(ticker.poll(t0 + SECOND), 0);
    }

    #[test]
    fn ticker_catches_up_after_slow_frames() {
        let t0 = Instant::now();
        let mut ticker = Ticker::every(t0, SECOND);

        // A 3.5-second stall still accounts for every second.
        assert_eq!(ticker.poll(t0 + Duration::from_millis(3500)), 3);
        assert_eq!(ticker.poll(t0 + 4 * SECOND), 1);
    }

    #[test]
    fn cancelled_ticker_stays_quiet() {
        let t0 = Instant::now();
        let mut ticker = Ticker::every(t0, SECOND);
        ticker.cancel();

        assert_eq!(ticker.poll(t0 + 10 * SECOND), 0);
    }
}
