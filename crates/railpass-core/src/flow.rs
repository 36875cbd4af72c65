//! Login submission flow.
//!
//! There is no backend. A submission that passes validation waits out a
//! simulated network round trip, reports success, then waits out a second
//! pause standing in for the hand-off to the post-login destination. The
//! hand-off itself is out of scope; callers log it and return to idle.

use std::time::{Duration, Instant};

use crate::timer::Deadline;

/// Simulated network round trip for a login request.
pub const LOGIN_ROUNDTRIP: Duration = Duration::from_secs(2);

/// Pause between the success report and the (stubbed) hand-off.
pub const HANDOFF_DELAY: Duration = Duration::from_millis(1500);

/// Events reported by [`LoginFlow::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    /// The simulated round trip finished; the attempt succeeded.
    Succeeded,
    /// The hand-off pause elapsed.
    HandOffDue,
}

/// Submit-flow state machine.
#[derive(Debug, Clone, Copy, Default)]
pub enum LoginFlow {
    #[default]
    Idle,
    /// Waiting out the round trip; the submit control shows busy.
    Submitting(Deadline),
    /// Success reported; waiting out the hand-off pause.
    Redirecting(Deadline),
}

impl LoginFlow {
    /// Starts the simulated round trip.
    ///
    /// Ignored while a round trip is already in flight (the submit control
    /// is disabled then anyway). Re-submitting during the hand-off pause
    /// cancels the stale hand-off and starts over.
    pub fn begin(&mut self, now: Instant) {
        if self.is_busy() {
            return;
        }
        self.reset();
        *self = Self::Submitting(Deadline::after(now, LOGIN_ROUNDTRIP));
    }

    /// Advances past any elapsed delay, reporting what happened.
    pub fn poll(&mut self, now: Instant) -> Option<FlowEvent> {
        match self {
            Self::Idle => None,
            Self::Submitting(deadline) => {
                if deadline.fire(now) {
                    *self = Self::Redirecting(Deadline::after(now, HANDOFF_DELAY));
                    Some(FlowEvent::Succeeded)
                } else {
                    None
                }
            }
            Self::Redirecting(deadline) => {
                if deadline.fire(now) {
                    *self = Self::Idle;
                    Some(FlowEvent::HandOffDue)
                } else {
                    None
                }
            }
        }
    }

    /// True while the submit control must appear busy.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting(_))
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Cancels any pending delay and returns to idle.
    pub fn reset(&mut self) {
        if let Self::Submitting(deadline) | Self::Redirecting(deadline) = self {
            deadline.cancel();
        }
        *self = Self::Idle;
    }
}
