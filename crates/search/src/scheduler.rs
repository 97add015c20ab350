//! Debounced search scheduling
//!
//! A single pending slot: every keystroke replaces whatever is pending and
//! pushes the deadline out by the quiet period. Only the last keyword of a
//! burst is ever emitted. The scheduler holds no timers; callers pass the
//! current `Instant` in and poll.
//!
//! ```text
//! Idle --on_input--> Pending(deadline) --poll(now >= deadline)--> Idle
//!                      |  ^
//!                      +--+ on_input (reschedule)
//! ```

use std::time::{Duration, Instant};

/// Scheduler state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerState {
    /// Nothing scheduled
    Idle,
    /// A search for `keyword` fires at `deadline`
    Pending {
        /// Keyword to search
        keyword: String,
        /// Earliest instant the search may run
        deadline: Instant,
    },
}

/// Debounce state machine for keyword searches
#[derive(Debug, Clone)]
pub struct SearchScheduler {
    quiet_period: Duration,
    distinct_until_changed: bool,
    state: SchedulerState,
    last_emitted: Option<String>,
}

impl SearchScheduler {
    /// Create an idle scheduler
    pub fn new(quiet_period: Duration) -> Self {
        SearchScheduler {
            quiet_period,
            distinct_until_changed: false,
            state: SchedulerState::Idle,
            last_emitted: None,
        }
    }

    /// Builder: swallow a due keyword equal to the last one emitted
    pub fn distinct_until_changed(mut self, enabled: bool) -> Self {
        self.distinct_until_changed = enabled;
        self
    }

    /// Record a keystroke; cancels any pending search and reschedules
    pub fn on_input(&mut self, keyword: impl Into<String>, now: Instant) {
        self.state = SchedulerState::Pending {
            keyword: keyword.into(),
            deadline: now + self.quiet_period,
        };
    }

    /// Emit the pending keyword once its deadline has passed.
    ///
    /// Returns `None` while the quiet period is running, when idle, or when
    /// the keyword is a repeat and `distinct_until_changed` is on. A due
    /// keyword always returns the scheduler to `Idle`.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.state {
            SchedulerState::Pending { deadline, .. } if now >= *deadline => {}
            _ => return None,
        }

        let keyword = match std::mem::replace(&mut self.state, SchedulerState::Idle) {
            SchedulerState::Pending { keyword, .. } => keyword,
            SchedulerState::Idle => return None,
        };

        if self.distinct_until_changed && self.last_emitted.as_deref() == Some(keyword.as_str()) {
            return None;
        }
        self.last_emitted = Some(keyword.clone());
        Some(keyword)
    }

    /// Drop the pending search, if any
    pub fn cancel(&mut self) {
        self.state = SchedulerState::Idle;
    }

    /// When the pending search fires
    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.state {
            SchedulerState::Pending { deadline, .. } => Some(*deadline),
            SchedulerState::Idle => None,
        }
    }

    /// Whether a search is pending
    pub fn is_pending(&self) -> bool {
        matches!(self.state, SchedulerState::Pending { .. })
    }

    /// Current state
    pub fn state(&self) -> &SchedulerState {
        &self.state
    }

    /// Configured quiet period
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }
}
