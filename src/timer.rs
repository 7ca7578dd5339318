//! Pause-aware countdown primitive.
//!
//! Every timer in the slideshow is one of these. The timer never schedules
//! anything itself: owners call [`ResumableTimer::poll`] from the event loop
//! and bound their wait with [`ResumableTimer::deadline`]. Elapsed time is
//! always a banked wall-clock delta from the last resume, never a tick count,
//! so a throttled or late poll cannot make the timer lag behind real
//! pause/resume intent.

use std::time::{Duration, Instant};

/// A countdown toward a fixed target whose elapsed time survives pause/resume
/// without drift.
///
/// State transitions: running -> paused (`pause`), paused -> running
/// (`resume`), any -> inert (`cancel`, or firing once via `poll`).
#[derive(Debug)]
pub struct ResumableTimer {
    target: Duration,
    /// Elapsed time accumulated across completed play intervals.
    banked: Duration,
    /// Set while running; `None` while paused or inert.
    resumed_at: Option<Instant>,
    cancelled: bool,
    fired: bool,
}

impl ResumableTimer {
    /// Begin counting toward `target` from zero elapsed, running.
    pub fn start(target: Duration, now: Instant) -> Self {
        Self {
            target,
            banked: Duration::ZERO,
            resumed_at: Some(now),
            cancelled: false,
            fired: false,
        }
    }

    /// Freeze elapsed time. Idempotent if already paused or inert.
    pub fn pause(&mut self, now: Instant) {
        if let Some(resumed_at) = self.resumed_at.take() {
            // saturating: guards a stale clock read ever producing a
            // negative delta.
            self.banked += now.saturating_duration_since(resumed_at);
        }
    }

    /// Continue counting from the frozen elapsed time.
    ///
    /// If the banked elapsed already meets the target the next `poll` fires
    /// immediately rather than waiting out a negative remainder.
    pub fn resume(&mut self, now: Instant) {
        if self.cancelled || self.fired || self.resumed_at.is_some() {
            return;
        }
        self.resumed_at = Some(now);
    }

    /// Mark the timer inert. Safe to call repeatedly; a cancelled timer never
    /// fires.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.resumed_at = None;
    }

    /// Total played time so far.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.resumed_at {
            Some(resumed_at) => self.banked + now.saturating_duration_since(resumed_at),
            None => self.banked,
        }
    }

    /// Played time left until the target.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.target.saturating_sub(self.elapsed(now))
    }

    /// Wall-clock instant at which `poll` would fire, while running.
    pub fn deadline(&self, now: Instant) -> Option<Instant> {
        if self.cancelled || self.fired || self.resumed_at.is_none() {
            return None;
        }
        Some(now + self.remaining(now))
    }

    /// Fire the completion at most once. Never fires while paused, cancelled,
    /// or already fired.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(resumed_at) = self.resumed_at else {
            return false;
        };
        if self.cancelled || self.fired {
            return false;
        }
        if self.elapsed(now) >= self.target {
            self.fired = true;
            self.banked += now.saturating_duration_since(resumed_at);
            self.resumed_at = None;
            return true;
        }
        false
    }

    /// Re-arm a fired timer for another interval of the same target,
    /// crediting the overshoot past the previous target so a late poll does
    /// not slow a repeating cadence. Intended for fixed-interval ticks; call
    /// immediately after `poll` returned true.
    pub fn rearm(&mut self, now: Instant) {
        if self.cancelled || !self.fired {
            return;
        }
        self.banked = self.banked.saturating_sub(self.target);
        self.fired = false;
        self.resumed_at = Some(now);
    }

    pub fn is_running(&self) -> bool {
        !self.cancelled && !self.fired && self.resumed_at.is_some()
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn target(&self) -> Duration {
        self.target
    }
}
