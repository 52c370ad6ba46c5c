//! Execution contexts.
//!
//! An executor owns the hardware resources a bound factory computes on. The
//! object model only needs to know which executor a factory was bound to.

use core::fmt;
use std::sync::Arc;

/// Handle to an execution context.
pub trait Executor: fmt::Debug + Send + Sync + 'static {
	/// Short backend name, e.g. `"reference"`.
	fn name(&self) -> &'static str;
}

/// Sequential host executor.
#[derive(Debug, Default)]
pub struct ReferenceExecutor {
	_private: (),
}

impl ReferenceExecutor {
	pub fn create() -> Arc<dyn Executor> {
		Arc::new(Self::default())
	}
}

impl Executor for ReferenceExecutor {
	fn name(&self) -> &'static str {
		"reference"
	}
}
