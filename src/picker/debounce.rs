// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cancel-pending, schedule-new debouncing.
//!
//! No timers live here. The caller passes the current time (milliseconds
//! from any fixed origin) into `submit` and `poll`, which keeps the state
//! machine usable from a terminal loop, a browser event loop or a test.

/// Default quiet period before a submitted query runs.
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

/// Holds at most one pending value and the time it becomes due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer<T> {
    delay_ms: u64,
    pending: Option<(u64, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Replace whatever is pending with `value`, due at `now_ms + delay`.
    pub fn submit(&mut self, value: T, now_ms: u64) {
        self.pending = Some((now_ms.saturating_add(self.delay_ms), value));
    }

    /// Take the pending value if its quiet period has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match self.pending {
            Some((due, _)) if now_ms >= due => self.pending.take().map(|(_, value)| value),
            _ => None,
        }
    }

    /// Take the pending value regardless of time.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }

    /// Drop the pending value.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due, if any.
    pub fn due_at(&self) -> Option<u64> {
        self.pending.as_ref().map(|(due, _)| *due)
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}
