//! Search limits and cooperative cancellation.
//!
//! The default search is a fixed two-ply look-ahead. A move-time budget and an
//! external stop flag can cut it short; searchers poll [`TimeControl`] and
//! return their best fully searched root move when it fires.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Fixed look-ahead used when the caller does not ask for anything else.
pub const DEFAULT_DEPTH: u8 = 2;

/// Controls how far and how long an engine may think.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies.
    pub depth: u8,
    /// Wall-clock budget for this move (None = unbounded).
    pub move_time: Option<Duration>,
    pub time_control: TimeControl,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Shares an externally owned stop flag, e.g. one a UI thread can raise.
    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.time_control.stopped = flag;
        self
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.is_stopped()
    }

    /// Starts the clock. Engines call this when a search begins.
    pub fn start(&mut self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(DEFAULT_DEPTH)
    }
}

/// Deadline plus a shared stop flag.
///
/// Clones share the flag, so any holder can stop a running search. The clock
/// only exists on the copy that called [`TimeControl::start`].
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    started: Option<Instant>,
    time_limit: Option<Duration>,
    /// Nodes between clock reads.
    check_interval: u64,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            started: None,
            time_limit,
            check_interval: 256,
        }
    }

    /// Starts the clock. A flag raised before the search began stays raised.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// Clears the flag so the controller can be reused for the next move.
    pub fn reset(&mut self) {
        self.stopped.store(false, Ordering::SeqCst);
        self.started = None;
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Reads the clock and raises the flag once the budget is spent.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }
        if let Some(limit) = self.time_limit
            && let Some(start) = self.started
            && start.elapsed() >= limit
        {
            self.stop();
            return true;
        }
        false
    }

    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes.is_multiple_of(self.check_interval)
    }

    pub fn elapsed(&self) -> Duration {
        self.started.map_or(Duration::ZERO, |s| s.elapsed())
    }

    /// Time left on the budget (None if unbounded).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
