//! Periodic position sync.
//!
//! While playback runs, the backend position is copied into the progress
//! indicator every [`SYNC_INTERVAL`]. The task stops itself the first time
//! the backend reports it is not playing and stays stopped until re-armed.
//!
//! Nothing here owns a timer: callers pass `Instant`s in, so the shell loop
//! (or a test) decides when time moves.

use std::time::{Duration, Instant};

use crate::backend::MediaBackend;
use crate::player::indicator::{to_progress_value, ProgressIndicator};

/// Poll period for the scrub bar (5 Hz).
pub const SYNC_INTERVAL: Duration = Duration::from_millis(200);

/// A cancellable fixed-period task.
#[derive(Debug, Clone)]
pub struct PeriodicTask {
    period: Duration,
    deadline: Option<Instant>,
}

impl PeriodicTask {
    /// Create a disarmed task.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    /// Schedule the next run one period from `now`. Re-arming an armed
    /// task just moves its deadline.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// If due, consume this run and schedule the next one.
    pub fn fire(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.deadline = Some(now + self.period);
        true
    }
}

/// Copies backend position into the indicator while playing.
#[derive(Debug, Clone)]
pub struct PositionSync {
    task: PeriodicTask,
}

impl Default for PositionSync {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionSync {
    pub fn new() -> Self {
        Self {
            task: PeriodicTask::new(SYNC_INTERVAL),
        }
    }

    pub fn arm(&mut self, now: Instant) {
        self.task.arm(now);
    }

    pub fn is_active(&self) -> bool {
        self.task.is_armed()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.task.next_deadline()
    }

    /// Run one sync step if it is due. Returns whether a step ran.
    ///
    /// Backend errors are logged; the task keeps running after them.
    pub fn tick<B: MediaBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        indicator: &mut ProgressIndicator,
        now: Instant,
    ) -> bool {
        if !self.task.fire(now) {
            return false;
        }

        match backend.position() {
            Ok(position) => indicator.set_value(to_progress_value(position)),
            Err(e) => tracing::warn!(error = %e, "failed to read playback position"),
        }

        match backend.is_playing() {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!("playback stopped, position sync cancelled");
                self.task.cancel();
            }
            Err(e) => tracing::warn!(error = %e, "failed to read playing state"),
        }

        true
    }
}
