//! Sequential strategy — runs every task inline on its calling context.
//!
//! No pool and no queue: concurrency is whatever the callers bring.
//! Independent callers of `schedule` proceed genuinely in parallel; the
//! strategy only gates execution and tracks what is in flight so a forced
//! shutdown can interrupt exactly the work that is still running.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use crate::error::TaskError;
use crate::interrupt::InterruptHandle;
use crate::strategy::{BoxedTask, SchedulingStrategy};

/// Executes each scheduled task to completion inline, on whichever context
/// the caller used to invoke [`schedule`](SchedulingStrategy::schedule).
///
/// Each in-flight call is tracked in an active set under a process-local
/// ticket, so [`stop_now`](SchedulingStrategy::stop_now) can drain the set
/// and trip the interrupt handle of everything still executing. Owns no
/// thread pool.
pub struct SequentialStrategy {
    /// Gate flag: `true` while scheduling is open. Instance-scoped, flipped
    /// at most once in effect.
    gate: AtomicBool,
    next_ticket: AtomicU64,
    active: Mutex<HashMap<u64, InterruptHandle>>,
}

impl SequentialStrategy {
    /// Create a new strategy with the gate open and nothing in flight.
    pub fn new() -> Self {
        Self {
            gate: AtomicBool::new(true),
            next_ticket: AtomicU64::new(0),
            active: Mutex::new(HashMap::new()),
        }
    }

    /// Register the calling context in the active set.
    ///
    /// The returned guard deregisters the ticket when dropped, on every exit
    /// path out of `schedule` — including a failing task.
    fn register(&self) -> ActiveGuard<'_> {
        let ticket = self.next_ticket.fetch_add(1, Ordering::Relaxed);
        let interrupt = InterruptHandle::new();
        self.active.lock().insert(ticket, interrupt.clone());
        ActiveGuard {
            active: &self.active,
            ticket,
            interrupt,
        }
    }
}

impl Default for SequentialStrategy {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped membership in the active set.
struct ActiveGuard<'a> {
    active: &'a Mutex<HashMap<u64, InterruptHandle>>,
    ticket: u64,
    interrupt: InterruptHandle,
}

impl Drop for ActiveGuard<'_> {
    fn drop(&mut self) {
        // A ticket already drained by stop_now is simply absent here
        self.active.lock().remove(&self.ticket);
    }
}

#[async_trait]
impl SchedulingStrategy for SequentialStrategy {
    async fn schedule(&self, task: BoxedTask) -> Result<(), TaskError> {
        if !self.can_schedule() {
            debug!("gate closed, task skipped");
            return Ok(());
        }

        let guard = self.register();
        let interrupt = guard.interrupt.clone();
        // Inline execution; the guard deregisters once the task resolves,
        // whether it succeeded or failed
        task(interrupt).await
    }

    fn stop(&self) -> bool {
        self.gate.swap(false, Ordering::AcqRel)
    }

    fn stop_now(&self) -> bool {
        let stopped = self.stop();

        // Drain strictly after the flip: anything that registers afterwards
        // must have passed the gate check first and is allowed to finish
        let drained: Vec<InterruptHandle> = {
            let mut active = self.active.lock();
            active.drain().map(|(_, handle)| handle).collect()
        };

        if !drained.is_empty() {
            debug!(in_flight = drained.len(), "interrupting active tasks");
        }
        for handle in drained {
            handle.interrupt();
        }

        stopped
    }

    fn can_schedule(&self) -> bool {
        self.gate.load(Ordering::Acquire)
    }

    fn finished(&self) -> Result<bool, TaskError> {
        Ok(self.stop())
    }

    fn has_shared_thread_pool(&self) -> bool {
        false
    }
}
