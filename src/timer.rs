//! One-shot timers owned by a widget.
//!
//! DESIGN
//! ======
//! Every delayed state change is a Tokio task registered under a
//! [`TimerKey`]. The owning widget keeps the [`TimerSet`]; dropping it (or
//! calling [`TimerSet::cancel_all`]) aborts everything still pending, so no
//! callback can run after the widget is gone. Callbacks should also hold only
//! `Weak` references to widget state.
//!
//! Finished tasks are pruned lazily on the next `schedule` call.

use std::collections::HashMap;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerKey(u64);

#[derive(Debug, Default)]
pub struct TimerSet {
    next_key: u64,
    tasks: HashMap<TimerKey, JoinHandle<()>>,
}

impl TimerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` once after `delay`.
    pub fn schedule<F>(&mut self, delay: Duration, callback: F) -> TimerKey
    where
        F: FnOnce() + Send + 'static,
    {
        self.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        })
    }

    /// Register an arbitrary timer-driven task (e.g. a multi-step sequence).
    pub fn spawn<Fut>(&mut self, task: Fut) -> TimerKey
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.prune_finished();
        let key = TimerKey(self.next_key);
        self.next_key += 1;
        self.tasks.insert(key, tokio::spawn(task));
        key
    }

    /// Abort one timer. Returns false if it was unknown or already fired.
    pub fn cancel(&mut self, key: TimerKey) -> bool {
        match self.tasks.remove(&key) {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    /// Abort every timer. Returns how many were still pending.
    pub fn cancel_all(&mut self) -> usize {
        let mut cancelled = 0;
        for (_, handle) in self.tasks.drain() {
            if !handle.is_finished() {
                cancelled += 1;
            }
            handle.abort();
        }
        if cancelled > 0 {
            debug!(cancelled, "cancelled pending timers");
        }
        cancelled
    }

    /// Number of timers that have not fired yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.values().filter(|h| !h.is_finished()).count()
    }

    fn prune_finished(&mut self) {
        self.tasks.retain(|_, handle| !handle.is_finished());
    }
}

/// Whole milliseconds of `duration`, saturating, for log fields.
#[must_use]
pub fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
#[path = "timer_test.rs"]
mod tests;
