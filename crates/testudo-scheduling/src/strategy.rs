//! Scheduling strategy contract — how a run's tasks are executed and how
//! in-flight work is shut down.
//!
//! Separates *what gets run* (opaque tasks supplied by the orchestrator) from
//! *how it runs* (inline on the caller, on a pool, ...). Every strategy gates
//! scheduling behind a one-time open -> closed transition and exposes a
//! first-caller-wins shutdown lifecycle.

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;

use crate::error::TaskError;
use crate::interrupt::InterruptHandle;

/// Boxed unit of work — the orchestrator-supplied operation to execute.
///
/// The task receives an [`InterruptHandle`] to observe at safe points. A
/// strategy never aborts the task body itself; a task that ignores its handle
/// simply runs to completion.
pub type BoxedTask = Box<
    dyn FnOnce(InterruptHandle) -> Pin<Box<dyn Future<Output = Result<(), TaskError>> + Send>>
        + Send,
>;

/// Adapt an async closure into a [`BoxedTask`].
pub fn task<F, Fut>(work: F) -> BoxedTask
where
    F: FnOnce(InterruptHandle) -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), TaskError>> + Send + 'static,
{
    Box::new(move |interrupt| Box::pin(work(interrupt)))
}

/// Trait controlling how a bounded stream of tasks is run and how in-flight
/// work is cancelled on shutdown.
///
/// One strategy instance is created per execution run; the gate and any
/// in-flight tracking are discarded with it.
#[async_trait]
pub trait SchedulingStrategy: Send + Sync {
    /// Run `task` under this strategy's policy if the gate is open.
    ///
    /// A call after shutdown is an expected race, not an error — the task is
    /// silently skipped and the call returns `Ok(())` with no side effect.
    /// A failure raised by the task propagates to the caller.
    async fn schedule(&self, task: BoxedTask) -> Result<(), TaskError>;

    /// Perform the one-time open -> closed gate transition.
    ///
    /// Returns `true` only to the single caller that performed the
    /// transition, `false` to every other caller. Does not interrupt
    /// in-flight work.
    fn stop(&self) -> bool;

    /// Perform the same transition as [`stop`](Self::stop), then force
    /// interruption of every task currently tracked as active.
    ///
    /// Returns the same first-caller-wins boolean as `stop`.
    fn stop_now(&self) -> bool;

    /// Point-in-time read of the gate.
    ///
    /// Advisory only — may be stale immediately after return under
    /// concurrent shutdown.
    fn can_schedule(&self) -> bool;

    /// Signal that no further scheduling is expected.
    ///
    /// At least as strong as [`stop`](Self::stop). Implementations that
    /// quiesce a shared pool may surface interruption errors here.
    fn finished(&self) -> Result<bool, TaskError>;

    /// `true` if tasks run on a pool this strategy (or a peer strategy)
    /// owns, in which case the caller must shut that pool down separately.
    fn has_shared_thread_pool(&self) -> bool;
}
