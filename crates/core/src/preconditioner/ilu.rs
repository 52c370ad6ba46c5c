use crate::factory::{Deferred, LinOpFactory};
use crate::scalar::{IndexInt, Scalar};

factory! {
	/// Incomplete LU preconditioner applying `L` and `U` with separate solvers.
	Ilu<V: Scalar, I: IndexInt>: LinOpFactory = "preconditioner::Ilu" {
		value_type: Some(V::TAG),
		index_type: Some(I::TAG),
	}
	{
		/// Apply `U` before `L`.
		reverse_apply: bool = false,
	}
	optional {
		/// Solver for the lower factor, a lower triangular solve when unset.
		l_solver: Deferred<dyn LinOpFactory>,
		/// Solver for the upper factor, an upper triangular solve when unset.
		u_solver: Deferred<dyn LinOpFactory>,
		/// Factorization producing `L` and `U`.
		factorization: Deferred<dyn LinOpFactory>,
	}
}
