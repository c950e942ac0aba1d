//! Injectable timers.
//!
//! The controller never holds a callback into itself. Scheduling a timer hands back a
//! [`TimerToken`]; when the timer fires, the token is delivered back to the controller,
//! which ignores it unless it is still the live one. This keeps all state mutation on
//! the single owner of the controller.
//!
//! ## Implementations
//!
//! - [`ManualScheduler`] - fake clock advanced explicitly (tests, deterministic hosts)
//! - [`ThreadScheduler`] - wall-clock timers on a background thread, fired tokens
//!   delivered over a channel

mod manual;
mod thread;

pub use manual::ManualScheduler;
pub use thread::ThreadScheduler;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Global counter so tokens are unique across scheduler instances
static TOKEN_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Handle to one scheduled timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    pub(crate) fn next() -> Self {
        Self(TOKEN_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A source of cancellable delayed wake-ups.
pub trait Scheduler {
    /// Schedule a wake-up after `delay`.
    fn schedule(&self, delay: Duration) -> TimerToken;

    /// Cancel a pending wake-up. Cancelling an unknown or already fired token is a no-op.
    fn cancel(&self, token: TimerToken);
}
