//! Interrupt Handle — cooperative interruption for in-flight task execution.
//!
//! Stands in for native thread interruption: a strategy hands every scheduled
//! task a handle and keeps a clone in its active set, so a forced shutdown can
//! trip the handles of whatever is still running. Interruption is a request —
//! the task body decides where (and whether) to observe it.

use tokio::sync::watch;

/// A cooperative interruption handle for one in-flight `schedule` call.
///
/// Backed by a `tokio::sync::watch` channel so a task can either poll the
/// flag at safe points or await the signal. Clone-friendly — the strategy's
/// active set and the task body hold copies of the same handle.
#[derive(Clone)]
pub struct InterruptHandle {
    tx: watch::Sender<bool>,
}

impl InterruptHandle {
    /// Create a new (not-yet-interrupted) handle.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// Request interruption. Idempotent — repeated calls are safe.
    pub fn interrupt(&self) {
        let _ = self.tx.send(true);
    }

    /// Check whether interruption has been requested.
    pub fn is_interrupted(&self) -> bool {
        *self.tx.borrow()
    }

    /// Wait until interruption is requested.
    ///
    /// Returns immediately if already interrupted. This is the safe point a
    /// long-running task parks on while it has nothing to poll.
    pub async fn interrupted(&self) {
        let mut rx = self.tx.subscribe();
        // wait_for observes the current value before suspending, so a handle
        // tripped before the call resolves immediately
        let _ = rx.wait_for(|interrupted| *interrupted).await;
    }
}

impl Default for InterruptHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_new_handle_not_interrupted() {
        let handle = InterruptHandle::new();
        assert!(!handle.is_interrupted());
    }

    #[tokio::test]
    async fn test_interrupt_sets_flag_and_is_idempotent() {
        let handle = InterruptHandle::new();
        handle.interrupt();
        handle.interrupt();
        assert!(handle.is_interrupted());
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let handle = InterruptHandle::new();
        let clone = handle.clone();
        handle.interrupt();
        assert!(clone.is_interrupted());
    }

    #[tokio::test]
    async fn test_interrupted_resolves_on_signal() {
        let handle = InterruptHandle::new();
        let clone = handle.clone();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            clone.interrupt();
        });

        tokio::time::timeout(Duration::from_secs(1), handle.interrupted())
            .await
            .expect("interrupted() should resolve once the handle is tripped");
    }

    #[tokio::test]
    async fn test_interrupted_resolves_immediately_if_already_tripped() {
        let handle = InterruptHandle::new();
        handle.interrupt();

        tokio::time::timeout(Duration::from_millis(10), handle.interrupted())
            .await
            .expect("interrupted() should resolve immediately when already tripped");
    }
}
