//! Debounce: coalesce bursts of calls into one invocation
//!
//! The timer handle the original captured in a closure is an explicit
//! struct here. Each `debounce(..)` call produces an independent
//! `Debouncer` with its own pending-timer state; instances never share
//! timers.
//!
//! Trailing mode (`immediate = false`): the wrapped function runs once
//! `wait` elapses with no further calls, with the arguments of the
//! last call. Leading mode (`immediate = true`): the first call of a
//! burst runs synchronously and the re-armed timer only closes the
//! burst, it never fires the function again.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;

struct Shared {
    pending: Option<JoinHandle<()>>,
    /// Bumped on every re-arm so a timer that lost the abort race can
    /// tell it is stale
    generation: u64,
}

pub struct Debouncer<T> {
    func: Arc<dyn Fn(T) + Send + Sync>,
    wait: Duration,
    immediate: bool,
    shared: Arc<Mutex<Shared>>,
}

/// Wrap `func` so bursts of calls within `wait` collapse into one
/// invocation
pub fn debounce<T, F>(func: F, wait: Duration, immediate: bool) -> Debouncer<T>
where
    T: Send + 'static,
    F: Fn(T) + Send + Sync + 'static,
{
    Debouncer {
        func: Arc::new(func),
        wait,
        immediate,
        shared: Arc::new(Mutex::new(Shared {
            pending: None,
            generation: 0,
        })),
    }
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<T: Send + 'static> Debouncer<T> {
    /// Record a call, resetting the pending timer.
    ///
    /// Must run inside a tokio runtime; the timer is a spawned task.
    pub fn call(&self, args: T) {
        let mut shared = lock(&self.shared);

        let call_now = self.immediate && shared.pending.is_none();
        if let Some(handle) = shared.pending.take() {
            handle.abort();
        }
        shared.generation = shared.generation.wrapping_add(1);
        let generation = shared.generation;
        let state = Arc::clone(&self.shared);
        let wait = self.wait;

        if self.immediate {
            // Timer only marks the end of the burst
            shared.pending = Some(tokio::spawn(async move {
                tokio::time::sleep(wait).await;
                let mut s = lock(&state);
                if s.generation == generation {
                    s.pending = None;
                }
            }));
            drop(shared);
            if call_now {
                (self.func)(args);
            }
        } else {
            let func = Arc::clone(&self.func);
            shared.pending = Some(tokio::spawn(async move {
                tokio::time::sleep(wait).await;
                let fire = {
                    let mut s = lock(&state);
                    if s.generation == generation {
                        s.pending = None;
                        true
                    } else {
                        false
                    }
                };
                if fire {
                    func(args);
                }
            }));
        }
    }

    /// Drop any pending invocation without firing it
    pub fn cancel_pending(&self) {
        let mut shared = lock(&self.shared);
        if let Some(handle) = shared.pending.take() {
            handle.abort();
        }
        shared.generation = shared.generation.wrapping_add(1);
    }

    /// Whether a timer is currently armed
    pub fn has_pending(&self) -> bool {
        lock(&self.shared).pending.is_some()
    }
}
