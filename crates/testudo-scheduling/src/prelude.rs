//! Prelude module for convenient imports.
//!
//! ```rust,no_run
//! use testudo_scheduling::prelude::*;
//! ```

pub use crate::error::TaskError;
pub use crate::interrupt::InterruptHandle;
pub use crate::sequential::SequentialStrategy;
pub use crate::strategy::{BoxedTask, SchedulingStrategy, task};
