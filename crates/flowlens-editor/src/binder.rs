//! Location binding and load-readiness.
//!
//! A diagnostic group may span files the developer has not opened. The binder
//! resolves every message to a live view (opening files as needed, without
//! stealing focus from the view the developer was in) and converts the
//! checker's 1-based coordinates to the host's zero-based convention exactly
//! once, at binding time.
//!
//! Views opened here may still be loading their buffer content. Readiness is
//! tracked per message as a [`PendingPoll`] re-checked at a fixed interval,
//! and aggregated through a [`ReadyBarrier`] so the controller acts only
//! after every referenced file has finished loading.

use crate::host::{EditorHost, HighlightRegion, ViewId};
use flowlens::RawMessage;
use std::time::{Duration, Instant};

/// Fixed interval between readiness re-checks for a still-loading view.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Re-checks after which a view that never finishes loading is abandoned.
///
/// 600 polls at the 50 ms interval is 30 seconds. A file deleted between the
/// check and the report would otherwise hold the barrier forever; on
/// exhaustion the message is counted as arrived so the rest of the report can
/// appear.
pub const MAX_POLL_ATTEMPTS: u32 = 600;

/// A checker message bound to a live view, in zero-based coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMessage {
    /// Zero-based start line.
    pub line: usize,
    /// Zero-based start column.
    pub col: usize,
    /// Zero-based end line.
    pub end_line: usize,
    /// Zero-based end column, exclusive. The checker's inclusive 1-based end
    /// column is the same number, so no decrement happens here.
    pub end_col: usize,
    /// Path of the file the message points into.
    pub path: String,
    /// Human-readable description.
    pub descr: String,
    /// The view this message is bound to.
    pub view: ViewId,
}

impl ResolvedMessage {
    /// Bind `raw` to a view, converting coordinates exactly once.
    ///
    /// If no view is open for the message's file, one is opened at the
    /// message's position and focus is handed straight back to the view the
    /// developer was in.
    pub fn bind(host: &mut dyn EditorHost, raw: &RawMessage) -> Self {
        let line = raw.line.saturating_sub(1) as usize;
        let col = raw.start.saturating_sub(1) as usize;
        let end_line = raw.end_line.saturating_sub(1) as usize;
        let end_col = raw.end as usize;

        let view = match host.find_open_view(&raw.path) {
            Some(view) => view,
            None => {
                let previous = host.active_view();
                let view = host.open_view(&raw.path, line, col);
                if let Some(previous) = previous {
                    host.focus_view(previous);
                }
                view
            }
        };

        Self {
            line,
            col,
            end_line,
            end_col,
            path: raw.path.clone(),
            descr: raw.descr.clone(),
            view,
        }
    }

    /// The highlight span for this message in its view.
    pub fn region(&self, host: &dyn EditorHost) -> HighlightRegion {
        let start = host.text_point(self.view, self.line, self.col);
        let end = host.text_point(self.view, self.end_line, self.end_col);
        HighlightRegion::new(start, end)
    }
}

/// Countdown barrier gating presentation on all views being loaded.
///
/// Created with the number of expected arrivals; [`ReadyBarrier::arrive`]
/// returns `true` exactly once, when the last expected arrival reports in.
/// Mutation is single-threaded only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyBarrier {
    remaining: usize,
    fired: bool,
}

impl ReadyBarrier {
    /// Create a barrier expecting `count` arrivals.
    pub fn new(count: usize) -> Self {
        Self {
            remaining: count,
            fired: false,
        }
    }

    /// Report one arrival. Returns `true` exactly once, when the count
    /// reaches zero.
    pub fn arrive(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.fired = true;
            return true;
        }
        false
    }

    /// Whether the barrier has fired.
    pub fn is_complete(&self) -> bool {
        self.fired
    }
}

/// One scheduled readiness re-check for a message's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPoll {
    /// Index into the session's message list.
    pub message: usize,
    /// When the next re-check is due.
    pub due: Instant,
    /// Re-checks performed so far.
    pub attempts: u32,
}

impl PendingPoll {
    /// Schedule the first check for message `index`, due immediately.
    pub fn immediate(index: usize, now: Instant) -> Self {
        Self {
            message: index,
            due: now,
            attempts: 0,
        }
    }

    /// Reschedule after observing a still-loading view.
    pub fn rescheduled(self, now: Instant) -> Self {
        Self {
            message: self.message,
            due: now + POLL_INTERVAL,
            attempts: self.attempts + 1,
        }
    }

    /// Whether this poll has exhausted its retry budget.
    pub fn exhausted(&self) -> bool {
        self.attempts >= MAX_POLL_ATTEMPTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barrier_fires_exactly_once_on_last_arrival() {
        let mut barrier = ReadyBarrier::new(3);
        assert!(!barrier.arrive());
        assert!(!barrier.arrive());
        assert!(!barrier.is_complete());
        assert!(barrier.arrive());
        assert!(barrier.is_complete());
        // Late arrivals never re-fire.
        assert!(!barrier.arrive());
    }

    #[test]
    fn test_single_arrival_barrier() {
        let mut barrier = ReadyBarrier::new(1);
        assert!(barrier.arrive());
        assert!(!barrier.arrive());
    }

    #[test]
    fn test_poll_reschedules_at_fixed_interval() {
        let now = Instant::now();
        let poll = PendingPoll::immediate(2, now);
        assert_eq!(poll.message, 2);
        assert_eq!(poll.due, now);
        assert_eq!(poll.attempts, 0);

        let later = now + Duration::from_millis(10);
        let rescheduled = poll.rescheduled(later);
        assert_eq!(rescheduled.message, 2);
        assert_eq!(rescheduled.due, later + POLL_INTERVAL);
        assert_eq!(rescheduled.attempts, 1);
        assert!(!rescheduled.exhausted());
    }

    #[test]
    fn test_poll_exhaustion() {
        let now = Instant::now();
        let mut poll = PendingPoll::immediate(0, now);
        for _ in 0..MAX_POLL_ATTEMPTS {
            assert!(!poll.exhausted());
            poll = poll.rescheduled(now);
        }
        assert!(poll.exhausted());
    }
}
