//! Fake-clock scheduler.

use super::{Scheduler, TimerToken};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Default)]
struct ManualClock {
    now: Duration,
    pending: Vec<(Duration, TimerToken)>,
    scheduled_total: usize,
}

/// Scheduler driven by an explicit clock.
///
/// Clones share the same clock, so a test can keep one handle while the
/// controller owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the fake clock
    pub fn now(&self) -> Duration {
        self.clock.lock().now
    }

    /// Move the clock forward and return the timers that came due, earliest first.
    pub fn advance(&self, by: Duration) -> Vec<TimerToken> {
        let mut clock = self.clock.lock();
        clock.now += by;
        let now = clock.now;

        let mut due: Vec<(Duration, TimerToken)> = Vec::new();
        clock.pending.retain(|entry| {
            if entry.0 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort();
        tracing::trace!(now_ms = now.as_millis() as u64, fired = due.len(), "Manual clock advanced");
        due.into_iter().map(|(_, token)| token).collect()
    }

    /// Number of timers waiting to fire
    pub fn pending_count(&self) -> usize {
        self.clock.lock().pending.len()
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.clock.lock().pending.iter().any(|(_, t)| *t == token)
    }

    /// Number of timers ever scheduled on this clock
    pub fn scheduled_total(&self) -> usize {
        self.clock.lock().scheduled_total
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration) -> TimerToken {
        let token = TimerToken::next();
        let mut clock = self.clock.lock();
        let deadline = clock.now + delay;
        clock.pending.push((deadline, token));
        clock.scheduled_total += 1;
        token
    }

    fn cancel(&self, token: TimerToken) {
        self.clock.lock().pending.retain(|(_, t)| *t != token);
    }
}
