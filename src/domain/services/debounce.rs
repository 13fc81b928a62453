//! Debounce scheduling
//!
//! One logical timer per watch root. Each change pushes the deadline back,
//! and the delay grows by 1.5x per consecutive reset up to `max_delay`, so a
//! steady stream of edits still ends in a single sync.
//!
//! The scheduler never sleeps: callers pass the current `Instant` and use
//! [`DebounceScheduler::deadline`] to decide how long to wait.

use std::time::{Duration, Instant};

/// Default starting delay
pub const DEFAULT_MIN_DELAY: Duration = Duration::from_millis(50);

/// Default delay cap
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(2000);

/// Delay growth per consecutive reset
pub const BACKOFF_FACTOR: f64 = 1.5;

/// Consecutive resets at which pressure is reported
pub const PRESSURE_THRESHOLD: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Idle,
    Armed { deadline: Instant },
}

/// Outcome of (re)arming the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debounce {
    /// Delay until the timer fires
    pub delay: Duration,
    /// Set once resets reach [`PRESSURE_THRESHOLD`]; carries the pending count.
    /// Advisory only, timing is unaffected.
    pub pressure: Option<usize>,
}

/// Debounce timer state machine
#[derive(Debug, Clone)]
pub struct DebounceScheduler {
    min_delay: Duration,
    max_delay: Duration,
    state: TimerState,
    consecutive_resets: u32,
}

impl Default for DebounceScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DELAY, DEFAULT_MAX_DELAY)
    }
}

impl DebounceScheduler {
    /// Create an idle scheduler. `max_delay` is raised to `min_delay` if smaller.
    pub fn new(min_delay: Duration, max_delay: Duration) -> Self {
        Self {
            min_delay,
            max_delay: max_delay.max(min_delay),
            state: TimerState::Idle,
            consecutive_resets: 0,
        }
    }

    /// `round(min(max_delay, min_delay * 1.5^resets))`, in whole milliseconds
    pub fn delay_for(&self, resets: u32) -> Duration {
        let min_ms = self.min_delay.as_millis() as f64;
        let max_ms = self.max_delay.as_millis() as f64;
        let exponent = resets.min(64) as i32;
        let raw = min_ms * BACKOFF_FACTOR.powi(exponent);
        Duration::from_millis(raw.min(max_ms).round() as u64)
    }

    /// A change arrived.
    ///
    /// From idle the reset counter starts over at 0; while armed the timer is
    /// restarted and the counter grows.
    pub fn change_occurred(&mut self, now: Instant, pending_count: usize) -> Debounce {
        match self.state {
            TimerState::Idle => self.consecutive_resets = 0,
            TimerState::Armed { .. } => {
                self.consecutive_resets = self.consecutive_resets.saturating_add(1)
            }
        }
        self.arm(now, pending_count)
    }

    /// The timer fired while a sync was still running: keep gathering changes
    /// by re-arming as though another change had arrived.
    pub fn rearm(&mut self, now: Instant, pending_count: usize) -> Debounce {
        self.consecutive_resets = self.consecutive_resets.saturating_add(1);
        self.arm(now, pending_count)
    }

    fn arm(&mut self, now: Instant, pending_count: usize) -> Debounce {
        let delay = self.delay_for(self.consecutive_resets);
        self.state = TimerState::Armed {
            deadline: now + delay,
        };
        Debounce {
            delay,
            pressure: (self.consecutive_resets >= PRESSURE_THRESHOLD).then_some(pending_count),
        }
    }

    /// Transition Armed -> Idle if the deadline has passed.
    ///
    /// The reset counter survives so that a following [`rearm`](Self::rearm)
    /// keeps growing the delay; call [`complete`](Self::complete) once a sync
    /// has actually been issued.
    pub fn fire(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.state = TimerState::Idle;
            true
        } else {
            false
        }
    }

    /// A debounced sync was issued; the burst is over.
    pub fn complete(&mut self) {
        self.state = TimerState::Idle;
        self.consecutive_resets = 0;
    }

    /// Disarm without flushing anything (unwatch/shutdown).
    pub fn cancel(&mut self) {
        self.complete();
    }

    /// Whether a timer is armed
    pub fn is_armed(&self) -> bool {
        matches!(self.state, TimerState::Armed { .. })
    }

    /// Whether the armed timer's deadline has passed
    pub fn is_due(&self, now: Instant) -> bool {
        matches!(self.state, TimerState::Armed { deadline } if now >= deadline)
    }

    /// Deadline of the armed timer
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            TimerState::Idle => None,
            TimerState::Armed { deadline } => Some(deadline),
        }
    }

    /// Time left until the deadline (zero if overdue)
    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consecutive resets in the current burst
    pub fn consecutive_resets(&self) -> u32 {
        self.consecutive_resets
    }
}
