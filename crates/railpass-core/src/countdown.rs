//! SMS resend countdown.
//!
//! Tracks the seconds a user must wait before asking for another code. The
//! counter holds no clock of its own; the owner ticks it once per elapsed
//! second (the UI pairs it with a [`Ticker`](crate::timer::Ticker)).
//!
//! ```
//! use railpass_core::countdown::SmsCountdown;
//!
//! let mut countdown = SmsCountdown::new();
//! countdown.start();
//! assert_eq!(countdown.label(), "60秒后重发");
//!
//! for _ in 0..60 {
//!     countdown.tick();
//! }
//! assert!(!countdown.is_active());
//! assert_eq!(countdown.label(), "发送验证码");
//! ```

/// Seconds between sends.
pub const RESEND_DELAY_SECS: u32 = 60;

/// Send-control label while no countdown is running.
pub const IDLE_LABEL: &str = "发送验证码";

/// Whole seconds left before the send control re-enables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SmsCountdown {
    remaining: u32,
}

impl SmsCountdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a fresh countdown at the full delay.
    pub fn start(&mut self) {
        self.remaining = RESEND_DELAY_SECS;
    }

    /// Consumes one second; returns the seconds now remaining.
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    /// True while the send control must stay disabled.
    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Label for the send control in its current state.
    pub fn label(&self) -> String {
        if self.is_active() {
            format!("{}秒后重发", self.remaining)
        } else {
            IDLE_LABEL.to_string()
        }
    }

    /// Stops the countdown immediately, re-enabling the send control.
    pub fn cancel(&mut self) {
        self.remaining = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_inactive_with_idle_label() {
        let countdown = SmsCountdown::new();
        assert!(!countdown.is_active());
        assert_eq!(countdown.label(), IDLE_LABEL);
    }

    #[test]
    fn start_arms_the_full_delay() {
        let mut countdown = SmsCountdown::new();
        countdown.start();
        assert!(countdown.is_active());
        assert_eq!(countdown.remaining(), RESEND_DELAY_SECS);
        assert_eq!(countdown.label(), "60秒后重发");
    }

    #[test]
    fn every_tick_relabels() {
        let mut countdown = SmsCountdown::new();
        countdown.start();

        for expected in (0..RESEND_DELAY_SECS).rev() {
            assert_eq!(countdown.tick(), expected);
            if expected > 0 {
                assert_eq!(countdown.label(), format!("{expected}秒后重发"));
            }
        }

        // Sixty ticks later the control is back to its default.
        assert!(!countdown.is_active());
        assert_eq!(countdown.label(), IDLE_LABEL);
    }

    #[test]
    fn tick_saturates_at_zero() {
        let mut countdown = SmsCountdown::new();
        assert_eq!(countdown.tick(), 0);
        assert!(!countdown.is_active());
    }

    #[test]
    fn cancel_reenables_immediately() {
        let mut countdown = SmsCountdown::new();
        countdown.start();
        countdown.cancel();
        assert!(!countdown.is_active());
        assert_eq!(countdown.label(), IDLE_LABEL);
    }

    #[test]
    fn restart_resets_to_full_delay() {
        let mut countdown = SmsCountdown::new();
        countdown.start();
        for _ in 0..40 {
            countdown.tick();
        }
        countdown.start();
        assert_eq!(countdown.remaining(), RESEND_DELAY_SECS);
    }
}
