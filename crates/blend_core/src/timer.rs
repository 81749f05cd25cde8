//! Frame-driven timers
//!
//! Blend components are ticked by the host's frame loop. Timers here never
//! read the clock themselves: every call receives the current `Instant`, so a
//! test harness can drive them with a fake clock by offsetting a base instant.

use std::time::{Duration, Instant};

/// A one-shot deadline
#[derive(Clone, Copy, Debug, Default)]
pub struct Timeout {
    deadline: Option<Instant>,
}

impl Timeout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the timeout to fire `delay` after `now`
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Drop a pending deadline
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once, on the first poll at or after the deadline
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the deadline, if armed
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

/// Configuration for debouncing behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig {
    /// How long to wait after the last trigger before firing
    pub delay: Duration,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(150),
        }
    }
}

impl DebounceConfig {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(ms),
        }
    }
}

/// Coalesces bursts of triggers into a single fire
///
/// Each `trigger` restarts the delay; `poll` fires once the burst has been
/// quiet for the configured delay.
#[derive(Debug, Clone)]
pub struct Debouncer {
    config: DebounceConfig,
    pending: Timeout,
    last_trigger: Option<Instant>,
}

impl Debouncer {
    pub fn new(config: DebounceConfig) -> Self {
        Self {
            config,
            pending: Timeout::new(),
            last_trigger: None,
        }
    }

    /// Record an event, cancelling and restarting any pending fire
    pub fn trigger(&mut self, now: Instant) {
        self.last_trigger = Some(now);
        self.pending.arm(now, self.config.delay);
    }

    /// Cancel any pending fire
    pub fn cancel(&mut self) {
        self.pending.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_pending()
    }

    /// Returns true once the delay has elapsed since the last trigger
    pub fn poll(&mut self, now: Instant) -> bool {
        let fired = self.pending.poll(now);
        if fired {
            tracing::trace!(
                "debounce fired {:?} after last trigger",
                self.time_since_last_trigger(now).unwrap_or_default()
            );
        }
        fired
    }

    /// Time since the last trigger
    pub fn time_since_last_trigger(&self, now: Instant) -> Option<Duration> {
        self.last_trigger
            .map(|last| now.saturating_duration_since(last))
    }

    pub fn config(&self) -> DebounceConfig {
        self.config
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DebounceConfig::default())
    }
}
