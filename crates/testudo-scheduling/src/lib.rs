//! # Scheduling Strategy Abstractions
//!
//! **Controls how a bounded run of tasks is executed, gated, and shut down.**
//!
//! An orchestrator creates one [`SchedulingStrategy`] per execution run,
//! submits opaque units of work via `schedule`, and ends the run through the
//! shutdown lifecycle: `stop` (close the gate), `stop_now` (close the gate
//! and interrupt everything still in flight), or `finished` (no further
//! scheduling expected). This crate provides the contract and the sequential
//! strategy, which runs every task inline on its caller and owns no pool.
//!
//! ## Quick Start
//!
//! ```rust
//! use testudo_scheduling::prelude::*;
//!
//! # async fn example() -> Result<(), TaskError> {
//! let strategy = SequentialStrategy::new();
//!
//! // Run one unit of work inline on this context
//! strategy
//!     .schedule(task(|interrupt| async move {
//!         if interrupt.is_interrupted() {
//!             return Err(TaskError::Interrupted);
//!         }
//!         Ok(())
//!     }))
//!     .await?;
//!
//! // First shutdown caller wins; later submissions are silently skipped
//! assert!(strategy.stop());
//! assert!(!strategy.can_schedule());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **[`SchedulingStrategy`] trait**: scheduling gate, one-time shutdown
//!   transition, capability introspection
//! - **[`SequentialStrategy`]**: inline execution, active-set tracking,
//!   forced interruption on `stop_now`
//! - **[`InterruptHandle`]**: per-call cooperative interruption flag, the
//!   stand-in for thread interruption
//! - **[`TaskError`]**: failure a task resolves to, propagated verbatim to
//!   the `schedule` caller

// Core modules
pub mod error;
pub mod interrupt;
pub mod prelude;
pub mod sequential;
pub mod strategy;

// Re-exports for convenience
pub use error::TaskError;
pub use interrupt::InterruptHandle;
pub use sequential::SequentialStrategy;
pub use strategy::{BoxedTask, SchedulingStrategy, task};

/// Create the default strategy for non-parallel runs: every task executes
/// inline on its calling context.
pub fn create_sequential_strategy() -> SequentialStrategy {
    SequentialStrategy::new()
}
