//! Stopping criteria.

mod residual_norm;

use std::time::Duration;

use strum_macros::{Display, EnumIter, EnumString};

pub use residual_norm::{
	ImplicitResidualNormFactory, ImplicitResidualNormParameters, ResidualNormFactory, ResidualNormParameters,
};

use crate::factory::{CriterionFactory, Deferred};

/// Reference value a residual norm is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Baseline {
	/// Norm of the right-hand side.
	#[default]
	RhsNorm,
	/// Norm of the initial residual.
	InitialResnorm,
	/// Absolute threshold.
	Absolute,
}

impl_bind_by_clone!(Baseline);

factory! {
	/// Stops after a fixed number of iterations.
	Iteration<>: CriterionFactory = "Iteration" {
		value_type: None,
		index_type: None,
	}
	{
		max_iters: usize = 0,
	}
}

factory! {
	/// Stops once the wall-clock limit is exceeded.
	Time<>: CriterionFactory = "Time" {
		value_type: None,
		index_type: None,
	}
	{
		time_limit: Duration = Duration::from_secs(10),
	}
}

factory! {
	/// Stops as soon as any of its criteria is met.
	Combined<>: CriterionFactory = "Combined" {
		value_type: None,
		index_type: None,
	}
	{
		criteria: Vec<Deferred<dyn CriterionFactory>> = Vec::new(),
	}
}
