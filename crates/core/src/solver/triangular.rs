//! Sparse triangular solvers.

use super::TrisolveAlgorithm;
use crate::scalar::{IndexInt, Scalar};

factory! {
	/// Forward substitution with a lower triangular matrix.
	LowerTrs<V: Scalar, I: IndexInt>: LinOpFactory = "solver::LowerTrs" {
		value_type: Some(V::TAG),
		index_type: Some(I::TAG),
	}
	{
		/// Number of right-hand sides the analysis phase prepares for.
		num_rhs: usize = 1,
		unit_diagonal: bool = false,
		algorithm: TrisolveAlgorithm = TrisolveAlgorithm::Sparselib,
	}
}

factory! {
	/// Backward substitution with an upper triangular matrix.
	UpperTrs<V: Scalar, I: IndexInt>: LinOpFactory = "solver::UpperTrs" {
		value_type: Some(V::TAG),
		index_type: Some(I::TAG),
	}
	{
		num_rhs: usize = 1,
		unit_diagonal: bool = false,
		algorithm: TrisolveAlgorithm = TrisolveAlgorithm::Sparselib,
	}
}
