use super::InitialGuessMode;
use crate::factory::{CriterionFactory, Deferred, LinOpFactory};
use crate::lin_op::SharedLinOp;
use crate::scalar::Scalar;

factory! {
	/// Iterative refinement around an inner solver.
	Ir<V: Scalar>: LinOpFactory = "solver::Ir" {
		value_type: Some(V::TAG),
		index_type: None,
	}
	{
		criteria: Vec<Deferred<dyn CriterionFactory>> = Vec::new(),
		/// Damping applied to each correction.
		relaxation_factor: V = V::one(),
		default_initial_guess: InitialGuessMode = InitialGuessMode::Rhs,
	}
	optional {
		/// Factory of the inner solver.
		solver: Deferred<dyn LinOpFactory>,
		/// Already generated inner solver; takes precedence over `solver`.
		generated_solver: SharedLinOp,
	}
}
