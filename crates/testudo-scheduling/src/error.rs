//! Unified error type for task execution under a scheduling strategy.

/// Failure raised by a task while running under a scheduling strategy.
///
/// Propagated verbatim to the caller of `schedule` — never swallowed,
/// retried, or isolated by the strategy.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// The task observed an interruption request and unwound early.
    #[error("task interrupted during shutdown")]
    Interrupted,

    /// Task-specific failure.
    #[error("task failed: {0}")]
    Failed(String),
}
