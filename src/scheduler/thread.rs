//! Wall-clock scheduler backed by a single timer thread.

use super::{Scheduler, TimerToken};
use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

#[derive(Default)]
struct TimerQueue {
    pending: Vec<(Instant, TimerToken)>,
    shutdown: bool,
}

struct Shared {
    queue: Mutex<TimerQueue>,
    wake: Condvar,
}

/// Scheduler that sleeps on a background thread and delivers fired tokens over a channel.
///
/// The owner drains fired tokens with [`ThreadScheduler::try_recv_fired`] or
/// [`ThreadScheduler::recv_fired_timeout`] and forwards them to the controller, so
/// no timer callback ever runs on the timer thread.
pub struct ThreadScheduler {
    shared: Arc<Shared>,
    fired: Receiver<TimerToken>,
    worker: Option<JoinHandle<()>>,
}

impl ThreadScheduler {
    pub fn new() -> std::io::Result<Self> {
        let shared = Arc::new(Shared {
            queue: Mutex::new(TimerQueue::default()),
            wake: Condvar::new(),
        });
        let (tx, rx) = mpsc::channel();

        let worker_shared = Arc::clone(&shared);
        let worker = std::thread::Builder::new()
            .name("carousel-timers".into())
            .spawn(move || run_timer_loop(&worker_shared, &tx))?;

        Ok(Self {
            shared,
            fired: rx,
            worker: Some(worker),
        })
    }

    /// Next fired token, if one is ready
    pub fn try_recv_fired(&self) -> Option<TimerToken> {
        self.fired.try_recv().ok()
    }

    /// Wait up to `timeout` for the next fired token
    pub fn recv_fired_timeout(&self, timeout: Duration) -> Option<TimerToken> {
        match self.fired.recv_timeout(timeout) {
            Ok(token) => Some(token),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Number of timers waiting to fire
    pub fn pending_count(&self) -> usize {
        self.shared.queue.lock().pending.len()
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule(&self, delay: Duration) -> TimerToken {
        let token = TimerToken::next();
        self.shared
            .queue
            .lock()
            .pending
            .push((Instant::now() + delay, token));
        self.shared.wake.notify_one();
        token
    }

    fn cancel(&self, token: TimerToken) {
        self.shared.queue.lock().pending.retain(|(_, t)| *t != token);
        self.shared.wake.notify_one();
    }
}

impl Drop for ThreadScheduler {
    fn drop(&mut self) {
        self.shared.queue.lock().shutdown = true;
        self.shared.wake.notify_one();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::error!("Timer thread panicked");
            }
        }
    }
}

fn run_timer_loop(shared: &Shared, tx: &Sender<TimerToken>) {
    let mut queue = shared.queue.lock();
    loop {
        if queue.shutdown {
            return;
        }

        let now = Instant::now();
        let mut due = Vec::new();
        queue.pending.retain(|entry| {
            if entry.0 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort();
        for (_, token) in due {
            tracing::trace!(token = token.id(), "Timer fired");
            if tx.send(token).is_err() {
                return;
            }
        }

        match queue.pending.iter().map(|(deadline, _)| *deadline).min() {
            Some(deadline) => {
                shared.wake.wait_until(&mut queue, deadline);
            }
            None => shared.wake.wait(&mut queue),
        }
    }
}
